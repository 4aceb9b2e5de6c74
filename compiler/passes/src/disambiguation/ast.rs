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

use super::Disambiguator;

use sable_ast::{
    Block,
    ExpressionReconstructor,
    ForLoopStatement,
    FunctionDefinition,
    LabelStatement,
    StackAssignStatement,
    Statement,
    StatementReconstructor,
};
use sable_span::Symbol;

impl ExpressionReconstructor for Disambiguator<'_> {
    type AdditionalOutput = ();

    fn translate_symbol(&mut self, symbol: Symbol) -> Symbol {
        self.translate_name(symbol)
    }
}

impl StatementReconstructor for Disambiguator<'_> {
    fn enter_block(&mut self, input: &Block) {
        let scope = self
            .scope_table
            .block_scope(input.id)
            .unwrap_or_else(|| panic!("scope analysis covers every block; block {} has no scope", input.id));
        self.scope_stack.push(scope);
    }

    fn exit_block(&mut self, _output: &Block) {
        self.scope_stack.pop();
    }

    fn enter_function(&mut self, input: &FunctionDefinition) {
        let scope = self
            .scope_table
            .function_scope(input.id)
            .unwrap_or_else(|| panic!("scope analysis covers every function; `{}` has no scope", input.identifier));
        self.scope_stack.push(scope);
    }

    fn exit_function(&mut self, _output: &FunctionDefinition) {
        self.scope_stack.pop();
    }

    /// The pre block's scope governs the whole loop, so it is entered
    /// before any part of the loop is translated. Translating the pre
    /// block then enters the same scope a second time, which is harmless.
    fn reconstruct_for_loop(&mut self, input: ForLoopStatement) -> (Statement, Self::AdditionalOutput) {
        let scope = self
            .scope_table
            .block_scope(input.pre.id)
            .unwrap_or_else(|| panic!("scope analysis covers every block; loop pre block {} has no scope", input.pre.id));
        self.scope_stack.push(scope);
        let for_loop = ForLoopStatement {
            pre: self.reconstruct_block(input.pre).0,
            condition: self.reconstruct_expression(input.condition).0,
            post: self.reconstruct_block(input.post).0,
            body: self.reconstruct_block(input.body).0,
            span: input.span,
            id: input.id,
        };
        self.scope_stack.pop();
        (Statement::ForLoop(Box::new(for_loop)), ())
    }

    fn reconstruct_label(&mut self, _input: LabelStatement) -> (Statement, Self::AdditionalOutput) {
        panic!("`LabelStatement`s should not exist in the AST at this phase of compilation.")
    }

    fn reconstruct_stack_assign(&mut self, _input: StackAssignStatement) -> (Statement, Self::AdditionalOutput) {
        panic!("`StackAssignStatement`s should not exist in the AST at this phase of compilation.")
    }
}
