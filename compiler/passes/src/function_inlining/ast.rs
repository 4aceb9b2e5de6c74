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

use super::{BodyCopier, FunctionInliner};
use crate::RenameTable;

use sable_ast::{
    AssignStatement,
    Block,
    CallExpression,
    ConditionalStatement,
    DefinitionStatement,
    Expression,
    ExpressionReconstructor,
    ExpressionStatement,
    ForLoopStatement,
    FunctionDefinition,
    Identifier,
    InstructionStatement,
    IntrinsicExpression,
    LabelStatement,
    StackAssignStatement,
    Statement,
    StatementReconstructor,
    SwitchStatement,
    TypedName,
};

use smallvec::smallvec;

impl ExpressionReconstructor for FunctionInliner<'_> {
    /// Statements to splice into the enclosing block just before the
    /// statement under reconstruction.
    type AdditionalOutput = Vec<Statement>;

    fn reconstruct_call(&mut self, input: CallExpression) -> (Expression, Self::AdditionalOutput) {
        let CallExpression { function, arguments, span, id } = input;

        // A call to a function whose body is being processed is left in
        // place; expanding it would unfold recursion forever.
        if self.currently_inlining.contains(&function.name) {
            let (arguments, prefix) = self.reconstruct_arguments(arguments);
            return (Expression::Call(CallExpression { function, arguments, span, id }), prefix);
        }

        let callee = self
            .functions
            .get(&function.name)
            .unwrap_or_else(|| panic!("call to `{}`, which is not defined anywhere in the tree", function.name))
            .clone();
        if callee.returns.len() != 1 {
            unimplemented!("inlining calls to functions with more than one return variable");
        }
        assert_eq!(
            callee.arguments.len(),
            arguments.len(),
            "call to `{}` with the wrong number of arguments",
            function.name
        );

        let mut prefix = Vec::new();
        let mut replacements = RenameTable::default();

        // Arguments are bound in reverse index order, each preceded by
        // its own prefix, so the emitted sequence evaluates the arguments
        // in the IL's order even when some of them were inlined.
        for (parameter, argument) in callee.arguments.iter().zip(arguments).rev() {
            let (argument, argument_prefix) = self.reconstruct_expression(argument);
            prefix.extend(argument_prefix);
            let fresh = self.dispenser.fresh(parameter.name);
            replacements.update(parameter.name, fresh);
            prefix.push(Statement::Definition(DefinitionStatement {
                variables: smallvec![TypedName {
                    name: fresh,
                    type_: parameter.type_,
                    span,
                    id: self.node_builder.next_id(),
                }],
                value: Some(argument),
                span,
                id: self.node_builder.next_id(),
            }));
        }

        // One uninitialized slot for the return value.
        let ret = &callee.returns[0];
        let fresh_return = self.dispenser.fresh(ret.name);
        replacements.update(ret.name, fresh_return);
        prefix.push(Statement::Definition(DefinitionStatement {
            variables: smallvec![TypedName { name: fresh_return, type_: ret.type_, span, id: self.node_builder.next_id() }],
            value: None,
            span,
            id: self.node_builder.next_id(),
        }));

        // The callee's body, with parameters, return and locals renamed.
        let mut copier = BodyCopier::new(&self.dispenser, replacements);
        prefix.push(Statement::Block(copier.reconstruct_block(callee.body).0));

        (Expression::Identifier(Identifier { name: fresh_return, span, id }), prefix)
    }

    fn reconstruct_intrinsic(&mut self, input: IntrinsicExpression) -> (Expression, Self::AdditionalOutput) {
        let (arguments, prefix) = self.reconstruct_arguments(input.arguments);
        (
            Expression::Intrinsic(IntrinsicExpression { opcode: input.opcode, arguments, span: input.span, id: input.id }),
            prefix,
        )
    }
}

impl StatementReconstructor for FunctionInliner<'_> {
    /// Reconstructs the statements of a block, splicing each statement's
    /// prefix in just before it.
    fn reconstruct_block(&mut self, input: Block) -> (Block, Self::AdditionalOutput) {
        let mut statements = Vec::with_capacity(input.statements.len());
        for statement in input.statements {
            let (statement, prefix) = self.reconstruct_statement(statement);
            statements.extend(prefix);
            statements.push(statement);
        }
        (Block { statements, span: input.span, id: input.id }, Default::default())
    }

    fn reconstruct_assign(&mut self, input: AssignStatement) -> (Statement, Self::AdditionalOutput) {
        if input.places.len() != 1 {
            unimplemented!("inlining in assignments with more than one target");
        }
        let (value, prefix) = self.reconstruct_expression(input.value);
        (
            Statement::Assign(Box::new(AssignStatement { places: input.places, value, span: input.span, id: input.id })),
            prefix,
        )
    }

    fn reconstruct_definition(&mut self, input: DefinitionStatement) -> (Statement, Self::AdditionalOutput) {
        if input.variables.len() != 1 {
            unimplemented!("inlining in declarations with more than one variable");
        }
        match input.value {
            Some(value) => {
                let (value, prefix) = self.reconstruct_expression(value);
                (
                    Statement::Definition(DefinitionStatement {
                        variables: input.variables,
                        value: Some(value),
                        span: input.span,
                        id: input.id,
                    }),
                    prefix,
                )
            }
            // The uninitialized form this pass itself emits; nothing to
            // inline.
            None => (Statement::Definition(input), Default::default()),
        }
    }

    /// The condition is not descended into, since the enclosing block
    /// cannot receive a prefix for it; the body is processed.
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

    fn reconstruct_expression_statement(&mut self, input: ExpressionStatement) -> (Statement, Self::AdditionalOutput) {
        let (expression, prefix) = self.reconstruct_expression(input.expression);
        (Statement::Expression(ExpressionStatement { expression, span: input.span, id: input.id }), prefix)
    }

    /// The discriminant is not descended into; case bodies are processed.
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

    /// The loop condition is not descended into; the pre, post, and body
    /// blocks are processed and splice their prefixes internally.
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

    fn reconstruct_function(&mut self, input: FunctionDefinition) -> (Statement, Self::AdditionalOutput) {
        let name = input.name();
        self.currently_inlining.insert(name);
        let function = FunctionDefinition {
            identifier: input.identifier,
            arguments: input.arguments,
            returns: input.returns,
            body: self.reconstruct_block(input.body).0,
            span: input.span,
            id: input.id,
        };
        assert!(self.currently_inlining.shift_remove(&name), "the guard set is balanced");
        (Statement::Function(Box::new(function)), Default::default())
    }

    fn reconstruct_instruction(&mut self, _input: InstructionStatement) -> (Statement, Self::AdditionalOutput) {
        panic!("stack-form `InstructionStatement`s should not exist in the AST at this phase of compilation.")
    }

    fn reconstruct_label(&mut self, _input: LabelStatement) -> (Statement, Self::AdditionalOutput) {
        panic!("`LabelStatement`s should not exist in the AST at this phase of compilation.")
    }

    fn reconstruct_stack_assign(&mut self, _input: StackAssignStatement) -> (Statement, Self::AdditionalOutput) {
        panic!("`StackAssignStatement`s should not exist in the AST at this phase of compilation.")
    }
}
