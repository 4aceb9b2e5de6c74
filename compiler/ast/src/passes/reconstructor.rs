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

//! Reconstructor traits for the AST.
//!
//! A reconstructor consumes a tree and produces a structurally independent
//! tree of the same shape, node by node. Passes override the methods for
//! the nodes they transform; everything else is rebuilt by the default
//! methods.
//!
//! Two extension points are shared by every reconstructing pass:
//!
//! - [`ExpressionReconstructor::translate_symbol`] is consulted at every
//!   name site (identifier uses, assignment targets, declared typed
//!   names, function names, label and stack-assignment names) and
//!   defaults to the identity. Renaming passes override only this.
//! - The scope hooks `enter_block`/`exit_block` and
//!   `enter_function`/`exit_function` fire around every block body and
//!   function definition, paired on all paths, so passes can track scope
//!   without rewriting the traversal.
//!
//! Every method also returns an `AdditionalOutput` alongside the rebuilt
//! node; passes thread pass-specific data (statement prefixes, purity
//! flags) through it.

use crate::*;

/// A Reconstructor trait for expressions in the AST.
pub trait ExpressionReconstructor {
    type AdditionalOutput: Default;

    /// Translates a name. The default is the identity.
    fn translate_symbol(&mut self, symbol: sable_span::Symbol) -> sable_span::Symbol {
        symbol
    }

    fn reconstruct_expression(&mut self, input: Expression) -> (Expression, Self::AdditionalOutput) {
        match input {
            Expression::Call(call) => self.reconstruct_call(call),
            Expression::Identifier(identifier) => self.reconstruct_identifier(identifier),
            Expression::Intrinsic(intrinsic) => self.reconstruct_intrinsic(intrinsic),
            Expression::Literal(literal) => self.reconstruct_literal(literal),
        }
    }

    fn reconstruct_call(&mut self, input: CallExpression) -> (Expression, Self::AdditionalOutput) {
        (
            Expression::Call(CallExpression {
                function: Identifier { name: self.translate_symbol(input.function.name), ..input.function },
                arguments: input.arguments.into_iter().map(|argument| self.reconstruct_expression(argument).0).collect(),
                span: input.span,
                id: input.id,
            }),
            Default::default(),
        )
    }

    fn reconstruct_identifier(&mut self, input: Identifier) -> (Expression, Self::AdditionalOutput) {
        (
            Expression::Identifier(Identifier { name: self.translate_symbol(input.name), ..input }),
            Default::default(),
        )
    }

    fn reconstruct_intrinsic(&mut self, input: IntrinsicExpression) -> (Expression, Self::AdditionalOutput) {
        (
            Expression::Intrinsic(IntrinsicExpression {
                opcode: input.opcode,
                arguments: input.arguments.into_iter().map(|argument| self.reconstruct_expression(argument).0).collect(),
                span: input.span,
                id: input.id,
            }),
            Default::default(),
        )
    }

    fn reconstruct_literal(&mut self, input: Literal) -> (Expression, Self::AdditionalOutput) {
        (Expression::Literal(input), Default::default())
    }
}

/// A Reconstructor trait for statements in the AST.
pub trait StatementReconstructor: ExpressionReconstructor {
    /// Called before a block's statements are reconstructed.
    fn enter_block(&mut self, _input: &Block) {}

    /// Called after a block's statements are reconstructed.
    /// Receives the rebuilt block; spans and IDs match the input.
    fn exit_block(&mut self, _output: &Block) {}

    /// Called after a function definition's name is translated and before
    /// its arguments, returns, and body are reconstructed.
    fn enter_function(&mut self, _input: &FunctionDefinition) {}

    /// Called after a function definition is reconstructed.
    fn exit_function(&mut self, _output: &FunctionDefinition) {}

    fn reconstruct_statement(&mut self, input: Statement) -> (Statement, Self::AdditionalOutput) {
        match input {
            Statement::Assign(assign) => self.reconstruct_assign(*assign),
            Statement::Block(block) => {
                let (block, additional) = self.reconstruct_block(block);
                (Statement::Block(block), additional)
            }
            Statement::Conditional(conditional) => self.reconstruct_conditional(conditional),
            Statement::Definition(definition) => self.reconstruct_definition(definition),
            Statement::Expression(expression) => self.reconstruct_expression_statement(expression),
            Statement::ForLoop(for_loop) => self.reconstruct_for_loop(*for_loop),
            Statement::Function(function) => self.reconstruct_function(*function),
            Statement::Instruction(instruction) => self.reconstruct_instruction(instruction),
            Statement::Label(label) => self.reconstruct_label(label),
            Statement::StackAssign(assign) => self.reconstruct_stack_assign(assign),
            Statement::Switch(switch) => self.reconstruct_switch(switch),
        }
    }

    fn reconstruct_assign(&mut self, input: AssignStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::Assign(Box::new(AssignStatement {
                places: input
                    .places
                    .into_iter()
                    .map(|place| Identifier { name: self.translate_symbol(place.name), ..place })
                    .collect(),
                value: self.reconstruct_expression(input.value).0,
                span: input.span,
                id: input.id,
            })),
            Default::default(),
        )
    }

    fn reconstruct_block(&mut self, input: Block) -> (Block, Self::AdditionalOutput) {
        self.enter_block(&input);
        let block = Block {
            statements: input.statements.into_iter().map(|statement| self.reconstruct_statement(statement).0).collect(),
            span: input.span,
            id: input.id,
        };
        self.exit_block(&block);
        (block, Default::default())
    }

    fn reconstruct_conditional(&mut self, input: ConditionalStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::Conditional(ConditionalStatement {
                condition: self.reconstruct_expression(input.condition).0,
                body: self.reconstruct_block(input.body).0,
                span: input.span,
                id: input.id,
            }),
            Default::default(),
        )
    }

    fn reconstruct_definition(&mut self, input: DefinitionStatement) -> (Statement, Self::AdditionalOutput) {
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

    fn reconstruct_expression_statement(&mut self, input: ExpressionStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::Expression(ExpressionStatement {
                expression: self.reconstruct_expression(input.expression).0,
                span: input.span,
                id: input.id,
            }),
            Default::default(),
        )
    }

    fn reconstruct_for_loop(&mut self, input: ForLoopStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::ForLoop(Box::new(ForLoopStatement {
                pre: self.reconstruct_block(input.pre).0,
                condition: self.reconstruct_expression(input.condition).0,
                post: self.reconstruct_block(input.post).0,
                body: self.reconstruct_block(input.body).0,
                span: input.span,
                id: input.id,
            })),
            Default::default(),
        )
    }

    fn reconstruct_function(&mut self, input: FunctionDefinition) -> (Statement, Self::AdditionalOutput) {
        // The function's own name binds in the enclosing scope, so it is
        // translated before the function scope is entered.
        let identifier = Identifier { name: self.translate_symbol(input.identifier.name), ..input.identifier };
        self.enter_function(&input);
        let function = FunctionDefinition {
            identifier,
            arguments: input.arguments.into_iter().map(|argument| self.reconstruct_typed_name(argument)).collect(),
            returns: input.returns.into_iter().map(|ret| self.reconstruct_typed_name(ret)).collect(),
            body: self.reconstruct_block(input.body).0,
            span: input.span,
            id: input.id,
        };
        self.exit_function(&function);
        (Statement::Function(Box::new(function)), Default::default())
    }

    fn reconstruct_instruction(&mut self, input: InstructionStatement) -> (Statement, Self::AdditionalOutput) {
        (Statement::Instruction(input), Default::default())
    }

    fn reconstruct_label(&mut self, input: LabelStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::Label(LabelStatement { name: self.translate_symbol(input.name), ..input }),
            Default::default(),
        )
    }

    fn reconstruct_stack_assign(&mut self, input: StackAssignStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::StackAssign(StackAssignStatement { name: self.translate_symbol(input.name), ..input }),
            Default::default(),
        )
    }

    fn reconstruct_switch(&mut self, input: SwitchStatement) -> (Statement, Self::AdditionalOutput) {
        (
            Statement::Switch(SwitchStatement {
                discriminant: self.reconstruct_expression(input.discriminant).0,
                cases: input.cases.into_iter().map(|case| self.reconstruct_case(case).0).collect(),
                span: input.span,
                id: input.id,
            }),
            Default::default(),
        )
    }

    fn reconstruct_case(&mut self, input: Case) -> (Case, Self::AdditionalOutput) {
        (
            Case {
                // Case values are literals; nothing to translate.
                value: input.value,
                body: self.reconstruct_block(input.body).0,
                span: input.span,
                id: input.id,
            },
            Default::default(),
        )
    }

    fn reconstruct_typed_name(&mut self, input: TypedName) -> TypedName {
        TypedName { name: self.translate_symbol(input.name), ..input }
    }
}
