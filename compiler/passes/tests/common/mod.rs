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

//! Helpers for building IL trees by hand. The parser lives upstream of
//! this repository, so tests construct their inputs directly.

#![allow(dead_code)]

use sable_ast::*;
use sable_passes::{CompilerState, Disambiguation, Pass, ScopeAnalysis};
use sable_span::{Span, Symbol};

use smallvec::smallvec;

/// Builds IL nodes with sequentially increasing node IDs.
pub struct TreeBuilder {
    pub ids: NodeBuilder,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self { ids: NodeBuilder::default() }
    }

    pub fn ident(&self, name: &str) -> Identifier {
        Identifier::new(Symbol::intern(name), self.ids.next_id())
    }

    pub fn typed(&self, name: &str) -> TypedName {
        TypedName::new(Symbol::intern(name), self.ids.next_id())
    }

    pub fn var(&self, name: &str) -> Expression {
        Expression::Identifier(self.ident(name))
    }

    pub fn num(&self, value: &str) -> Expression {
        Expression::Literal(Literal::number(Symbol::intern(value), self.ids.next_id()))
    }

    pub fn call(&self, function: &str, arguments: Vec<Expression>) -> Expression {
        Expression::Call(CallExpression {
            function: self.ident(function),
            arguments,
            span: Span::default(),
            id: self.ids.next_id(),
        })
    }

    pub fn intrinsic(&self, opcode: Opcode, arguments: Vec<Expression>) -> Expression {
        Expression::Intrinsic(IntrinsicExpression { opcode, arguments, span: Span::default(), id: self.ids.next_id() })
    }

    pub fn assign(&self, place: &str, value: Expression) -> Statement {
        Statement::Assign(Box::new(AssignStatement {
            places: smallvec![self.ident(place)],
            value,
            span: Span::default(),
            id: self.ids.next_id(),
        }))
    }

    pub fn multi_assign(&self, places: &[&str], value: Expression) -> Statement {
        Statement::Assign(Box::new(AssignStatement {
            places: places.iter().map(|place| self.ident(place)).collect(),
            value,
            span: Span::default(),
            id: self.ids.next_id(),
        }))
    }

    pub fn define(&self, name: &str, value: Expression) -> Statement {
        Statement::Definition(DefinitionStatement {
            variables: smallvec![self.typed(name)],
            value: Some(value),
            span: Span::default(),
            id: self.ids.next_id(),
        })
    }

    pub fn declare(&self, name: &str) -> Statement {
        Statement::Definition(DefinitionStatement {
            variables: smallvec![self.typed(name)],
            value: None,
            span: Span::default(),
            id: self.ids.next_id(),
        })
    }

    pub fn expr(&self, expression: Expression) -> Statement {
        Statement::Expression(ExpressionStatement { expression, span: Span::default(), id: self.ids.next_id() })
    }

    pub fn block(&self, statements: Vec<Statement>) -> Block {
        Block { statements, span: Span::default(), id: self.ids.next_id() }
    }

    pub fn nested(&self, statements: Vec<Statement>) -> Statement {
        Statement::Block(self.block(statements))
    }

    pub fn function(&self, name: &str, arguments: &[&str], returns: &[&str], body: Vec<Statement>) -> Statement {
        Statement::Function(Box::new(FunctionDefinition {
            identifier: self.ident(name),
            arguments: arguments.iter().map(|argument| self.typed(argument)).collect(),
            returns: returns.iter().map(|ret| self.typed(ret)).collect(),
            body: self.block(body),
            span: Span::default(),
            id: self.ids.next_id(),
        }))
    }

    pub fn conditional(&self, condition: Expression, body: Vec<Statement>) -> Statement {
        Statement::Conditional(ConditionalStatement {
            condition,
            body: self.block(body),
            span: Span::default(),
            id: self.ids.next_id(),
        })
    }

    pub fn switch(&self, discriminant: Expression, cases: Vec<(Option<&str>, Vec<Statement>)>) -> Statement {
        Statement::Switch(SwitchStatement {
            discriminant,
            cases: cases
                .into_iter()
                .map(|(value, body)| Case {
                    value: value.map(|value| Literal::number(Symbol::intern(value), self.ids.next_id())),
                    body: self.block(body),
                    span: Span::default(),
                    id: self.ids.next_id(),
                })
                .collect(),
            span: Span::default(),
            id: self.ids.next_id(),
        })
    }

    pub fn for_loop(
        &self,
        pre: Vec<Statement>,
        condition: Expression,
        post: Vec<Statement>,
        body: Vec<Statement>,
    ) -> Statement {
        Statement::ForLoop(Box::new(ForLoopStatement {
            pre: self.block(pre),
            condition,
            post: self.block(post),
            body: self.block(body),
            span: Span::default(),
            id: self.ids.next_id(),
        }))
    }

    pub fn label(&self, name: &str) -> Statement {
        Statement::Label(LabelStatement { name: Symbol::intern(name), span: Span::default(), id: self.ids.next_id() })
    }

    pub fn stack_assign(&self, name: &str) -> Statement {
        Statement::StackAssign(StackAssignStatement {
            name: Symbol::intern(name),
            span: Span::default(),
            id: self.ids.next_id(),
        })
    }
}

/// Wraps a hand-built tree in a `CompilerState`, carrying the builder's
/// node counter along so synthesized nodes get unused IDs.
pub fn state_of(builder: TreeBuilder, root: Block) -> CompilerState {
    CompilerState { ast: Ast::new(root), node_builder: builder.ids, ..Default::default() }
}

/// Runs scope analysis followed by disambiguation.
pub fn disambiguate(state: &mut CompilerState) {
    ScopeAnalysis::do_pass((), state).unwrap();
    Disambiguation::do_pass((), state).unwrap();
}
