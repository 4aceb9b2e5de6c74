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

use super::{ExpressionInliner, inliner};

use sable_ast::{
    CallExpression,
    ConditionalStatement,
    Expression,
    ExpressionReconstructor,
    ForLoopStatement,
    Identifier,
    IntrinsicExpression,
    LabelStatement,
    Literal,
    StackAssignStatement,
    Statement,
    StatementReconstructor,
    SwitchStatement,
};

use indexmap::IndexMap;
use itertools::Itertools;

impl ExpressionReconstructor for ExpressionInliner {
    /// Whether the reconstructed expression is movable.
    type AdditionalOutput = bool;

    fn reconstruct_call(&mut self, input: CallExpression) -> (Expression, Self::AdditionalOutput) {
        let CallExpression { function, arguments, span, id } = input;

        let mut all_movable = true;
        let arguments: Vec<Expression> = arguments
            .into_iter()
            .map(|argument| {
                let (argument, movable) = self.reconstruct_expression(argument);
                all_movable &= movable;
                argument
            })
            .collect();

        // Substitution duplicates or drops argument occurrences, so it is
        // only sound when every argument is movable.
        if all_movable {
            if let Some(callee) = self.inlinable.get(&function.name) {
                let replacements: IndexMap<_, _> =
                    callee.arguments.iter().map(|parameter| parameter.name).zip_eq(arguments.iter()).collect();
                let inlined = inliner::substitute(Self::body_expression(callee), &replacements);
                let movable = inliner::is_movable(&inlined);
                return (inlined, movable);
            }
        }

        (Expression::Call(CallExpression { function, arguments, span, id }), false)
    }

    fn reconstruct_identifier(&mut self, input: Identifier) -> (Expression, Self::AdditionalOutput) {
        (Expression::Identifier(input), true)
    }

    fn reconstruct_intrinsic(&mut self, input: IntrinsicExpression) -> (Expression, Self::AdditionalOutput) {
        let mut all_movable = true;
        let arguments: Vec<Expression> = input
            .arguments
            .into_iter()
            .map(|argument| {
                let (argument, movable) = self.reconstruct_expression(argument);
                all_movable &= movable;
                argument
            })
            .collect();
        let movable = input.opcode.is_movable() && all_movable;
        (
            Expression::Intrinsic(IntrinsicExpression { opcode: input.opcode, arguments, span: input.span, id: input.id }),
            movable,
        )
    }

    fn reconstruct_literal(&mut self, input: Literal) -> (Expression, Self::AdditionalOutput) {
        (Expression::Literal(input), true)
    }
}

impl StatementReconstructor for ExpressionInliner {
    /// Calls in the condition are not inlined; the enclosing block could
    /// not receive prefix statements for that position if substitution
    /// ever needed them. The body is processed.
    fn reconstruct_conditional(&mut self, input: ConditionalStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::Conditional(ConditionalStatement {
                condition: input.condition,
                body: self.reconstruct_block(input.body).0,
                span: input.span,
                id: input.id,
            }),
            Default::default(),
        )
    }

    /// The discriminant is left alone; case bodies are processed.
    fn reconstruct_switch(&mut self, input: SwitchStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::Switch(SwitchStatement {
                discriminant: input.discriminant,
                cases: input.cases.into_iter().map(|case| self.reconstruct_case(case).0).collect(),
                span: input.span,
                id: input.id,
            }),
            Default::default(),
        )
    }

    /// The loop condition is left alone; the pre, post, and body blocks
    /// are processed.
    fn reconstruct_for_loop(&mut self, input: ForLoopStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::ForLoop(Box::new(ForLoopStatement {
                pre: self.reconstruct_block(input.pre).0,
                condition: input.condition,
                post: self.reconstruct_block(input.post).0,
                body: self.reconstruct_block(input.body).0,
                span: input.span,
                id: input.id,
            })),
            Default::default(),
        )
    }

    fn reconstruct_label(&mut self, _input: LabelStatement) -> (Statement, Self::AdditionalOutput) {
        panic!("`LabelStatement`s should not exist in the AST at this phase of compilation.")
    }

    fn reconstruct_stack_assign(&mut self, _input: StackAssignStatement) -> (Statement, Self::AdditionalOutput) {
        panic!("`StackAssignStatement`s should not exist in the AST at this phase of compilation.")
    }
}
