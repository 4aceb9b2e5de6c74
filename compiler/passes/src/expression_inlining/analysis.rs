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

//! Analysis phase of the ExpressionInlining pass.

use sable_ast::{
    Block,
    CallExpression,
    ExpressionVisitor,
    FunctionDefinition,
    Identifier,
    IntrinsicExpression,
    Literal,
    Statement,
    StatementVisitor,
};
use sable_span::Symbol;

use indexmap::{IndexMap, IndexSet};

/// Classifies functions as inlinable at expression level.
///
/// A function is inlinable iff it has exactly one return variable, its
/// body is a single assignment to that variable, and the assigned
/// expression references neither the return variable nor the function's
/// own name. The expression-level visitation returns whether an
/// expression is admissible as such a body.
#[derive(Debug, Default)]
pub struct InlinableFunctionFilter {
    /// The functions found inlinable so far, by name.
    pub inlinable: IndexMap<Symbol, FunctionDefinition>,
    /// Names the body expression under scrutiny must not reference: the
    /// return variable and the function itself.
    disallowed: IndexSet<Symbol>,
}

impl InlinableFunctionFilter {
    /// Scans `block` and returns the inlinable functions by name.
    pub fn run(block: &Block) -> IndexMap<Symbol, FunctionDefinition> {
        let mut filter = Self::default();
        filter.visit_block(block);
        filter.inlinable
    }

    fn allowed(&self, name: Symbol) -> bool {
        !self.disallowed.contains(&name)
    }

    /// Visits every expression in `arguments`; true iff all are admissible.
    fn all(&mut self, arguments: &[sable_ast::Expression]) -> bool {
        let mut failed = false;
        for argument in arguments {
            if !self.visit_expression(argument, &()) {
                failed = true;
            }
        }
        !failed
    }
}

impl<'a> ExpressionVisitor<'a> for InlinableFunctionFilter {
    type AdditionalInput = ();
    type Output = bool;

    fn visit_call(&mut self, input: &'a CallExpression, _additional: &Self::AdditionalInput) -> Self::Output {
        let arguments_admissible = self.all(&input.arguments);
        self.allowed(input.function.name) && arguments_admissible
    }

    fn visit_identifier(&mut self, input: &'a Identifier, _additional: &Self::AdditionalInput) -> Self::Output {
        self.allowed(input.name)
    }

    fn visit_intrinsic(&mut self, input: &'a IntrinsicExpression, _additional: &Self::AdditionalInput) -> Self::Output {
        self.all(&input.arguments)
    }

    fn visit_literal(&mut self, _input: &'a Literal, _additional: &Self::AdditionalInput) -> Self::Output {
        true
    }
}

impl<'a> StatementVisitor<'a> for InlinableFunctionFilter {
    fn visit_function(&mut self, input: &'a FunctionDefinition) {
        if input.returns.len() == 1 && input.body.statements.len() == 1 {
            let return_variable = input.returns[0].name;
            if let Statement::Assign(assign) = &input.body.statements[0] {
                if assign.places.len() == 1 && assign.places[0].name == return_variable {
                    // A nested function definition would make the body
                    // multi-statement, so the shape gate already rules
                    // those out.
                    self.disallowed = [return_variable, input.name()].into_iter().collect();
                    if self.visit_expression(&assign.value, &()) {
                        self.inlinable.insert(input.name(), input.clone());
                    }
                    self.disallowed.clear();
                    return;
                }
            }
        }
        // Not the right shape; nested definitions may still qualify.
        self.visit_block(&input.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sable_ast::{AssignStatement, Expression, NodeBuilder, Opcode, TypedName};
    use sable_span::create_session_if_not_set_then;

    use smallvec::smallvec;

    fn function(
        ids: &NodeBuilder,
        name: &str,
        arguments: &[&str],
        returns: &[&str],
        body: Vec<Statement>,
    ) -> FunctionDefinition {
        FunctionDefinition {
            identifier: Identifier::new(Symbol::intern(name), ids.next_id()),
            arguments: arguments.iter().map(|a| TypedName::new(Symbol::intern(a), ids.next_id())).collect(),
            returns: returns.iter().map(|r| TypedName::new(Symbol::intern(r), ids.next_id())).collect(),
            body: Block { statements: body, span: Default::default(), id: ids.next_id() },
            span: Default::default(),
            id: ids.next_id(),
        }
    }

    fn assign(ids: &NodeBuilder, place: &str, value: Expression) -> Statement {
        Statement::Assign(Box::new(AssignStatement {
            places: smallvec![Identifier::new(Symbol::intern(place), ids.next_id())],
            value,
            span: Default::default(),
            id: ids.next_id(),
        }))
    }

    fn root(functions: Vec<FunctionDefinition>, ids: &NodeBuilder) -> Block {
        Block {
            statements: functions.into_iter().map(|f| Statement::Function(Box::new(f))).collect(),
            span: Default::default(),
            id: ids.next_id(),
        }
    }

    #[test]
    fn single_assignment_of_intrinsic_is_inlinable() {
        create_session_if_not_set_then(|_| {
            let ids = NodeBuilder::default();
            // function f(a, b) -> r { r := add(a, b) }
            let value = Expression::Intrinsic(IntrinsicExpression {
                opcode: Opcode::Add,
                arguments: vec![
                    Expression::Identifier(Identifier::new(Symbol::intern("a"), ids.next_id())),
                    Expression::Identifier(Identifier::new(Symbol::intern("b"), ids.next_id())),
                ],
                span: Default::default(),
                id: ids.next_id(),
            });
            let body = vec![assign(&ids, "r", value)];
            let block = root(vec![function(&ids, "f", &["a", "b"], &["r"], body)], &ids);

            let inlinable = InlinableFunctionFilter::run(&block);
            assert!(inlinable.contains_key(&Symbol::intern("f")));
        });
    }

    #[test]
    fn self_reference_is_not_inlinable() {
        create_session_if_not_set_then(|_| {
            let ids = NodeBuilder::default();
            // function f(a) -> r { r := f(a) }
            let value = Expression::Call(CallExpression {
                function: Identifier::new(Symbol::intern("f"), ids.next_id()),
                arguments: vec![Expression::Identifier(Identifier::new(Symbol::intern("a"), ids.next_id()))],
                span: Default::default(),
                id: ids.next_id(),
            });
            let body = vec![assign(&ids, "r", value)];
            let block = root(vec![function(&ids, "f", &["a"], &["r"], body)], &ids);

            assert!(InlinableFunctionFilter::run(&block).is_empty());
        });
    }

    #[test]
    fn return_reference_is_not_inlinable() {
        create_session_if_not_set_then(|_| {
            let ids = NodeBuilder::default();
            // function f(a) -> r { r := add(r, a) }
            let value = Expression::Intrinsic(IntrinsicExpression {
                opcode: Opcode::Add,
                arguments: vec![
                    Expression::Identifier(Identifier::new(Symbol::intern("r"), ids.next_id())),
                    Expression::Identifier(Identifier::new(Symbol::intern("a"), ids.next_id())),
                ],
                span: Default::default(),
                id: ids.next_id(),
            });
            let body = vec![assign(&ids, "r", value)];
            let block = root(vec![function(&ids, "f", &["a"], &["r"], body)], &ids);

            assert!(InlinableFunctionFilter::run(&block).is_empty());
        });
    }

    #[test]
    fn multi_statement_body_is_not_inlinable() {
        create_session_if_not_set_then(|_| {
            let ids = NodeBuilder::default();
            // function f(a) -> r { r := a r := a }
            let use_a = || Expression::Identifier(Identifier::new(Symbol::intern("a"), ids.next_id()));
            let body = vec![assign(&ids, "r", use_a()), assign(&ids, "r", use_a())];
            let block = root(vec![function(&ids, "f", &["a"], &["r"], body)], &ids);

            assert!(InlinableFunctionFilter::run(&block).is_empty());
        });
    }

    #[test]
    fn nested_definitions_are_still_considered() {
        create_session_if_not_set_then(|_| {
            let ids = NodeBuilder::default();
            // function outer(a) -> r { function inner(b) -> s { s := b } r := a r := a }
            let inner_value = Expression::Identifier(Identifier::new(Symbol::intern("b"), ids.next_id()));
            let inner = function(&ids, "inner", &["b"], &["s"], vec![assign(&ids, "s", inner_value)]);
            let use_a = || Expression::Identifier(Identifier::new(Symbol::intern("a"), ids.next_id()));
            let body = vec![
                Statement::Function(Box::new(inner)),
                assign(&ids, "r", use_a()),
                assign(&ids, "r", use_a()),
            ];
            let block = root(vec![function(&ids, "outer", &["a"], &["r"], body)], &ids);

            let inlinable = InlinableFunctionFilter::run(&block);
            assert!(!inlinable.contains_key(&Symbol::intern("outer")));
            assert!(inlinable.contains_key(&Symbol::intern("inner")));
        });
    }

    #[test]
    fn calls_to_other_functions_are_admissible() {
        create_session_if_not_set_then(|_| {
            let ids = NodeBuilder::default();
            // function f(a) -> r { r := g(a) }
            let value = Expression::Call(CallExpression {
                function: Identifier::new(Symbol::intern("g"), ids.next_id()),
                arguments: vec![Expression::Identifier(Identifier::new(Symbol::intern("a"), ids.next_id()))],
                span: Default::default(),
                id: ids.next_id(),
            });
            let body = vec![assign(&ids, "r", value)];
            let block = root(vec![function(&ids, "f", &["a"], &["r"], body)], &ids);

            assert!(InlinableFunctionFilter::run(&block).contains_key(&Symbol::intern("f")));
        });
    }
}
