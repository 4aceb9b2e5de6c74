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

//! Visitor traits for the AST.
//!
//! A visitor borrows the tree and observes it; it never rewrites. Analysis
//! passes implement these and override only the nodes they care about.

use crate::*;

/// A Visitor trait for expressions in the AST.
pub trait ExpressionVisitor<'a> {
    type AdditionalInput: Default;
    type Output: Default;

    fn visit_expression(&mut self, input: &'a Expression, additional: &Self::AdditionalInput) -> Self::Output {
        match input {
            Expression::Call(call) => self.visit_call(call, additional),
            Expression::Identifier(identifier) => self.visit_identifier(identifier, additional),
            Expression::Intrinsic(intrinsic) => self.visit_intrinsic(intrinsic, additional),
            Expression::Literal(literal) => self.visit_literal(literal, additional),
        }
    }

    fn visit_call(&mut self, input: &'a CallExpression, additional: &Self::AdditionalInput) -> Self::Output {
        input.arguments.iter().for_each(|argument| {
            self.visit_expression(argument, additional);
        });
        Default::default()
    }

    fn visit_identifier(&mut self, _input: &'a Identifier, _additional: &Self::AdditionalInput) -> Self::Output {
        Default::default()
    }

    fn visit_intrinsic(&mut self, input: &'a IntrinsicExpression, additional: &Self::AdditionalInput) -> Self::Output {
        input.arguments.iter().for_each(|argument| {
            self.visit_expression(argument, additional);
        });
        Default::default()
    }

    fn visit_literal(&mut self, _input: &'a Literal, _additional: &Self::AdditionalInput) -> Self::Output {
        Default::default()
    }
}

/// A Visitor trait for statements in the AST.
pub trait StatementVisitor<'a>: ExpressionVisitor<'a> {
    fn visit_statement(&mut self, input: &'a Statement) {
        match input {
            Statement::Assign(assign) => self.visit_assign(assign),
            Statement::Block(block) => self.visit_block(block),
            Statement::Conditional(conditional) => self.visit_conditional(conditional),
            Statement::Definition(definition) => self.visit_definition(definition),
            Statement::Expression(expression) => self.visit_expression_statement(expression),
            Statement::ForLoop(for_loop) => self.visit_for_loop(for_loop),
            Statement::Function(function) => self.visit_function(function),
            Statement::Instruction(instruction) => self.visit_instruction(instruction),
            Statement::Label(label) => self.visit_label(label),
            Statement::StackAssign(assign) => self.visit_stack_assign(assign),
            Statement::Switch(switch) => self.visit_switch(switch),
        }
    }

    fn visit_assign(&mut self, input: &'a AssignStatement) {
        input.places.iter().for_each(|place| {
            self.visit_place(place);
        });
        self.visit_expression(&input.value, &Default::default());
    }

    /// Visits the target of an assignment.
    fn visit_place(&mut self, _input: &'a Identifier) {}

    fn visit_block(&mut self, input: &'a Block) {
        input.statements.iter().for_each(|statement| self.visit_statement(statement));
    }

    fn visit_conditional(&mut self, input: &'a ConditionalStatement) {
        self.visit_expression(&input.condition, &Default::default());
        self.visit_block(&input.body);
    }

    fn visit_definition(&mut self, input: &'a DefinitionStatement) {
        input.variables.iter().for_each(|variable| self.visit_typed_name(variable));
        if let Some(value) = &input.value {
            self.visit_expression(value, &Default::default());
        }
    }

    fn visit_expression_statement(&mut self, input: &'a ExpressionStatement) {
        self.visit_expression(&input.expression, &Default::default());
    }

    fn visit_for_loop(&mut self, input: &'a ForLoopStatement) {
        self.visit_block(&input.pre);
        self.visit_expression(&input.condition, &Default::default());
        self.visit_block(&input.post);
        self.visit_block(&input.body);
    }

    fn visit_function(&mut self, input: &'a FunctionDefinition) {
        input.arguments.iter().for_each(|argument| self.visit_typed_name(argument));
        input.returns.iter().for_each(|ret| self.visit_typed_name(ret));
        self.visit_block(&input.body);
    }

    fn visit_instruction(&mut self, _input: &'a InstructionStatement) {}

    fn visit_label(&mut self, _input: &'a LabelStatement) {}

    fn visit_stack_assign(&mut self, _input: &'a StackAssignStatement) {}

    fn visit_switch(&mut self, input: &'a SwitchStatement) {
        self.visit_expression(&input.discriminant, &Default::default());
        input.cases.iter().for_each(|case| self.visit_case(case));
    }

    fn visit_case(&mut self, input: &'a Case) {
        if let Some(value) = &input.value {
            self.visit_literal(value, &Default::default());
        }
        self.visit_block(&input.body);
    }

    fn visit_typed_name(&mut self, _input: &'a TypedName) {}
}
