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

use sable_ast::{
    Block,
    CallExpression,
    ExpressionVisitor,
    FunctionDefinition,
    Identifier,
    LabelStatement,
    StackAssignStatement,
    StatementVisitor,
    TypedName,
};
use sable_span::Symbol;

use indexmap::{IndexMap, IndexSet};

/// A one-pass scan of a tree that records every name appearing anywhere,
/// declared or used, and a directory of every function definition.
///
/// The statement-level inliner seeds its [`crate::NameDispenser`] with
/// `names` and resolves callees through `functions`.
#[derive(Debug, Default)]
pub struct NameCollector {
    /// Every name in the tree.
    pub names: IndexSet<Symbol>,
    /// Every function definition in the tree, by name.
    pub functions: IndexMap<Symbol, FunctionDefinition>,
}

impl NameCollector {
    /// Scans `block`.
    pub fn collect(block: &Block) -> Self {
        let mut collector = Self::default();
        collector.visit_block(block);
        collector
    }
}

impl<'a> ExpressionVisitor<'a> for NameCollector {
    type AdditionalInput = ();
    type Output = ();

    fn visit_call(&mut self, input: &'a CallExpression, additional: &Self::AdditionalInput) -> Self::Output {
        self.names.insert(input.function.name);
        input.arguments.iter().for_each(|argument| {
            self.visit_expression(argument, additional);
        });
    }

    fn visit_identifier(&mut self, input: &'a Identifier, _additional: &Self::AdditionalInput) -> Self::Output {
        self.names.insert(input.name);
    }
}

impl<'a> StatementVisitor<'a> for NameCollector {
    fn visit_place(&mut self, input: &'a Identifier) {
        self.names.insert(input.name);
    }

    fn visit_typed_name(&mut self, input: &'a TypedName) {
        self.names.insert(input.name);
    }

    fn visit_function(&mut self, input: &'a FunctionDefinition) {
        self.names.insert(input.name());
        self.functions.insert(input.name(), input.clone());
        input.arguments.iter().for_each(|argument| self.visit_typed_name(argument));
        input.returns.iter().for_each(|ret| self.visit_typed_name(ret));
        self.visit_block(&input.body);
    }

    fn visit_label(&mut self, input: &'a LabelStatement) {
        self.names.insert(input.name);
    }

    fn visit_stack_assign(&mut self, input: &'a StackAssignStatement) {
        self.names.insert(input.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sable_ast::{AssignStatement, DefinitionStatement, Expression, Statement};
    use sable_span::create_session_if_not_set_then;

    use smallvec::smallvec;

    fn ident(name: &str) -> Identifier {
        Identifier::new(Symbol::intern(name), 0)
    }

    #[test]
    fn collects_declarations_uses_and_functions() {
        create_session_if_not_set_then(|_| {
            // function f(a) -> r { r := a }
            // let x := f(y)
            let function = FunctionDefinition {
                identifier: ident("f"),
                arguments: vec![TypedName::new(Symbol::intern("a"), 0)],
                returns: vec![TypedName::new(Symbol::intern("r"), 0)],
                body: Block {
                    statements: vec![Statement::Assign(Box::new(AssignStatement {
                        places: smallvec![ident("r")],
                        value: Expression::Identifier(ident("a")),
                        span: Default::default(),
                        id: 0,
                    }))],
                    span: Default::default(),
                    id: 0,
                },
                span: Default::default(),
                id: 0,
            };
            let block = Block {
                statements: vec![
                    Statement::Function(Box::new(function)),
                    Statement::Definition(DefinitionStatement {
                        variables: smallvec![TypedName::new(Symbol::intern("x"), 0)],
                        value: Some(Expression::Call(CallExpression {
                            function: ident("f"),
                            arguments: vec![Expression::Identifier(ident("y"))],
                            span: Default::default(),
                            id: 0,
                        })),
                        span: Default::default(),
                        id: 0,
                    }),
                ],
                span: Default::default(),
                id: 0,
            };

            let collector = NameCollector::collect(&block);
            for name in ["f", "a", "r", "x", "y"] {
                assert!(collector.names.contains(&Symbol::intern(name)), "missing {name}");
            }
            assert_eq!(collector.functions.len(), 1);
            assert!(collector.functions.contains_key(&Symbol::intern("f")));
        });
    }
}
