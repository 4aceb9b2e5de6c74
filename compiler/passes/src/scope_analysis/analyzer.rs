// Copyright (C) 2021-2026 The Sable Team.
// This file is part of the Sable library.

// The Sable library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Sable library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Sable library. If not, see <https://www.gnu.org/licenses/>.

use crate::{ScopeId, ScopeTable};

use sable_ast::{
    Block,
    DefinitionStatement,
    ExpressionVisitor,
    ForLoopStatement,
    FunctionDefinition,
    StatementVisitor,
};

/// Fills a [`ScopeTable`] by walking the tree.
#[derive(Debug, Default)]
pub struct ScopeAnalyzer {
    /// The table under construction.
    pub table: ScopeTable,
    /// The scope currently open.
    current: Option<ScopeId>,
}

impl ScopeAnalyzer {
    fn current_scope(&self) -> ScopeId {
        self.current.expect("declarations only occur inside a block")
    }
}

impl<'a> ExpressionVisitor<'a> for ScopeAnalyzer {
    type AdditionalInput = ();
    type Output = ();
}

impl<'a> StatementVisitor<'a> for ScopeAnalyzer {
    fn visit_block(&mut self, input: &'a Block) {
        let scope = self.table.new_scope(self.current);
        self.table.bind_block(input.id, scope);
        let previous = self.current.replace(scope);
        input.statements.iter().for_each(|statement| self.visit_statement(statement));
        self.current = previous;
    }

    fn visit_definition(&mut self, input: &'a DefinitionStatement) {
        for variable in &input.variables {
            self.table.declare(self.current_scope(), variable.name);
        }
    }

    fn visit_function(&mut self, input: &'a FunctionDefinition) {
        // The function's name binds in the enclosing block scope.
        self.table.declare(self.current_scope(), input.name());

        // Arguments and returns live in a virtual scope of their own,
        // which the body scope nests in.
        let virtual_scope = self.table.new_scope(self.current);
        self.table.bind_function(input.id, virtual_scope);
        for typed_name in input.arguments.iter().chain(&input.returns) {
            self.table.declare(virtual_scope, typed_name.name);
        }

        let previous = self.current.replace(virtual_scope);
        self.visit_block(&input.body);
        self.current = previous;
    }

    fn visit_for_loop(&mut self, input: &'a ForLoopStatement) {
        // The pre block's scope governs the whole loop: condition, post
        // block and body all see its declarations.
        let scope = self.table.new_scope(self.current);
        self.table.bind_block(input.pre.id, scope);
        let previous = self.current.replace(scope);
        input.pre.statements.iter().for_each(|statement| self.visit_statement(statement));
        self.visit_block(&input.post);
        self.visit_block(&input.body);
        self.current = previous;
    }
}
