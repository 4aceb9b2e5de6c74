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

use crate::{NameDispenser, RenameTable};

use sable_ast::{
    DefinitionStatement,
    ExpressionReconstructor,
    FunctionDefinition,
    Statement,
    StatementReconstructor,
};
use sable_span::Symbol;

/// Copies an inlined callee's body, renaming through a translation table.
///
/// The table arrives pre-loaded with the callee's parameters and return
/// variable; every local declaration encountered during the copy gets a
/// fresh name and is added to the table, so the inlined body cannot
/// collide with anything at the call site. Names without an entry are
/// left as they are.
pub struct BodyCopier<'a> {
    /// The enclosing inliner's fresh-name source.
    pub(crate) dispenser: &'a NameDispenser,
    /// The translation table for this copy.
    pub(crate) replacements: RenameTable,
}

impl<'a> BodyCopier<'a> {
    /// Initializes a new `BodyCopier` with a pre-loaded translation table.
    pub fn new(dispenser: &'a NameDispenser, replacements: RenameTable) -> Self {
        Self { dispenser, replacements }
    }
}

impl ExpressionReconstructor for BodyCopier<'_> {
    type AdditionalOutput = ();

    fn translate_symbol(&mut self, symbol: Symbol) -> Symbol {
        self.replacements.lookup(symbol).unwrap_or(symbol)
    }
}

impl StatementReconstructor for BodyCopier<'_> {
    /// Locals declared inside the body get fresh names before the
    /// declaration is copied, so every later use translates.
    fn reconstruct_definition(&mut self, input: DefinitionStatement) -> (Statement, Self::AdditionalOutput) {
        for variable in &input.variables {
            let fresh = self.dispenser.fresh(variable.name);
            self.replacements.update(variable.name, fresh);
        }
        (
            Statement::Definition(DefinitionStatement {
                variables: input.variables.into_iter().map(|variable| self.reconstruct_typed_name(variable)).collect(),
                value: input.value.map(|value| self.reconstruct_expression(value).0),
                span: input.span,
                id: input.id,
            }),
            Default::default(),
        )
    }

    fn reconstruct_function(&mut self, _input: FunctionDefinition) -> (Statement, Self::AdditionalOutput) {
        panic!("Function hoisting has to be done before function inlining.")
    }
}
