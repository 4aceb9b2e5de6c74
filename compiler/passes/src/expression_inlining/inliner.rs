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

use sable_ast::{CallExpression, Expression, FunctionDefinition, IntrinsicExpression, Statement};
use sable_span::Symbol;

use indexmap::IndexMap;

/// The reconstructor behind [`crate::ExpressionInlining`].
pub struct ExpressionInliner {
    /// The functions the analysis phase classified as inlinable, by name.
    pub(crate) inlinable: IndexMap<Symbol, FunctionDefinition>,
}

impl ExpressionInliner {
    /// Initializes a new `ExpressionInliner` over the analysis result.
    pub fn new(inlinable: IndexMap<Symbol, FunctionDefinition>) -> Self {
        Self { inlinable }
    }

    /// The expression an inlinable function's body assigns to its return
    /// variable.
    pub(crate) fn body_expression(function: &FunctionDefinition) -> &Expression {
        match &function.body.statements[0] {
            Statement::Assign(assign) => &assign.value,
            _ => unreachable!("the analysis phase only admits single-assignment bodies"),
        }
    }
}

/// A copy of `expression` in which every identifier with an entry in
/// `replacements` is replaced by its mapped expression.
///
/// Replacement is not applied again inside the substituted expressions:
/// argument expressions are inserted verbatim.
pub(crate) fn substitute(expression: &Expression, replacements: &IndexMap<Symbol, &Expression>) -> Expression {
    match expression {
        Expression::Call(call) => Expression::Call(CallExpression {
            function: call.function,
            arguments: call.arguments.iter().map(|argument| substitute(argument, replacements)).collect(),
            span: call.span,
            id: call.id,
        }),
        Expression::Identifier(identifier) => match replacements.get(&identifier.name) {
            Some(replacement) => (*replacement).clone(),
            None => Expression::Identifier(*identifier),
        },
        Expression::Intrinsic(intrinsic) => Expression::Intrinsic(IntrinsicExpression {
            opcode: intrinsic.opcode,
            arguments: intrinsic.arguments.iter().map(|argument| substitute(argument, replacements)).collect(),
            span: intrinsic.span,
            id: intrinsic.id,
        }),
        Expression::Literal(literal) => Expression::Literal(*literal),
    }
}

/// Whether evaluating `expression` has no observable effect and observes
/// no state other instructions may change, so it can be duplicated,
/// reordered or dropped.
pub(crate) fn is_movable(expression: &Expression) -> bool {
    match expression {
        Expression::Identifier(_) | Expression::Literal(_) => true,
        Expression::Intrinsic(intrinsic) => {
            intrinsic.opcode.is_movable() && intrinsic.arguments.iter().all(is_movable)
        }
        // A user call may do anything.
        Expression::Call(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sable_ast::{Identifier, Literal, Opcode};
    use sable_span::create_session_if_not_set_then;

    fn var(name: &str) -> Expression {
        Expression::Identifier(Identifier::new(Symbol::intern(name), 0))
    }

    fn num(value: &str) -> Expression {
        Expression::Literal(Literal::number(Symbol::intern(value), 0))
    }

    fn add(left: Expression, right: Expression) -> Expression {
        Expression::Intrinsic(IntrinsicExpression {
            opcode: Opcode::Add,
            arguments: vec![left, right],
            span: Default::default(),
            id: 0,
        })
    }

    #[test]
    fn substitution_replaces_parameters_once() {
        create_session_if_not_set_then(|_| {
            // add(a, b) with a -> add(a, 1): the `a` inside the replacement
            // stays untouched.
            let replacement = add(var("a"), num("1"));
            let replacements: IndexMap<Symbol, &Expression> =
                IndexMap::from_iter([(Symbol::intern("a"), &replacement)]);
            let result = substitute(&add(var("a"), var("b")), &replacements);
            assert_eq!(result.to_string(), "add(add(a, 1), b)");
        });
    }

    #[test]
    fn movability_follows_the_opcode() {
        create_session_if_not_set_then(|_| {
            assert!(is_movable(&add(var("x"), num("2"))));
            let load = Expression::Intrinsic(IntrinsicExpression {
                opcode: Opcode::Load,
                arguments: vec![num("0")],
                span: Default::default(),
                id: 0,
            });
            assert!(!is_movable(&load));
            assert!(!is_movable(&add(var("x"), load)));
        });
    }
}
