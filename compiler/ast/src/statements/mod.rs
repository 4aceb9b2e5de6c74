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

use crate::{Node, NodeID};

use sable_span::Span;

use serde::{Deserialize, Serialize};

use std::fmt;

pub mod assign;
pub use assign::*;

pub mod block;
pub use block::*;

pub mod conditional;
pub use conditional::*;

pub mod definition;
pub use definition::*;

pub mod expression;
pub use expression::*;

pub mod for_loop;
pub use for_loop::*;

pub mod function;
pub use function::*;

pub mod stack;
pub use stack::*;

pub mod switch;
pub use switch::*;

/// A statement of the IL.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// An assignment to previously declared variables.
    Assign(Box<AssignStatement>),
    /// A nested block.
    Block(Block),
    /// A conditional.
    Conditional(ConditionalStatement),
    /// A variable declaration.
    Definition(DefinitionStatement),
    /// An expression evaluated for its effects.
    Expression(ExpressionStatement),
    /// A loop.
    ForLoop(Box<ForLoopStatement>),
    /// A function definition.
    Function(Box<FunctionDefinition>),
    /// A legacy stack-form opcode.
    Instruction(InstructionStatement),
    /// A legacy stack-form label.
    Label(LabelStatement),
    /// A legacy stack-form assignment.
    StackAssign(StackAssignStatement),
    /// A multi-arm dispatch.
    Switch(SwitchStatement),
}

impl Node for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Assign(n) => n.span,
            Statement::Block(n) => n.span,
            Statement::Conditional(n) => n.span,
            Statement::Definition(n) => n.span,
            Statement::Expression(n) => n.span,
            Statement::ForLoop(n) => n.span,
            Statement::Function(n) => n.span,
            Statement::Instruction(n) => n.span,
            Statement::Label(n) => n.span,
            Statement::StackAssign(n) => n.span,
            Statement::Switch(n) => n.span,
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Statement::Assign(n) => n.set_span(span),
            Statement::Block(n) => n.set_span(span),
            Statement::Conditional(n) => n.set_span(span),
            Statement::Definition(n) => n.set_span(span),
            Statement::Expression(n) => n.set_span(span),
            Statement::ForLoop(n) => n.set_span(span),
            Statement::Function(n) => n.set_span(span),
            Statement::Instruction(n) => n.set_span(span),
            Statement::Label(n) => n.set_span(span),
            Statement::StackAssign(n) => n.set_span(span),
            Statement::Switch(n) => n.set_span(span),
        }
    }

    fn id(&self) -> NodeID {
        match self {
            Statement::Assign(n) => n.id,
            Statement::Block(n) => n.id,
            Statement::Conditional(n) => n.id,
            Statement::Definition(n) => n.id,
            Statement::Expression(n) => n.id,
            Statement::ForLoop(n) => n.id,
            Statement::Function(n) => n.id,
            Statement::Instruction(n) => n.id,
            Statement::Label(n) => n.id,
            Statement::StackAssign(n) => n.id,
            Statement::Switch(n) => n.id,
        }
    }

    fn set_id(&mut self, id: NodeID) {
        match self {
            Statement::Assign(n) => n.set_id(id),
            Statement::Block(n) => n.set_id(id),
            Statement::Conditional(n) => n.set_id(id),
            Statement::Definition(n) => n.set_id(id),
            Statement::Expression(n) => n.set_id(id),
            Statement::ForLoop(n) => n.set_id(id),
            Statement::Function(n) => n.set_id(id),
            Statement::Instruction(n) => n.set_id(id),
            Statement::Label(n) => n.set_id(id),
            Statement::StackAssign(n) => n.set_id(id),
            Statement::Switch(n) => n.set_id(id),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign(n) => write!(f, "{n}"),
            Statement::Block(n) => write!(f, "{n}"),
            Statement::Conditional(n) => write!(f, "{n}"),
            Statement::Definition(n) => write!(f, "{n}"),
            Statement::Expression(n) => write!(f, "{n}"),
            Statement::ForLoop(n) => write!(f, "{n}"),
            Statement::Function(n) => write!(f, "{n}"),
            Statement::Instruction(n) => write!(f, "{n}"),
            Statement::Label(n) => write!(f, "{n}"),
            Statement::StackAssign(n) => write!(f, "{n}"),
            Statement::Switch(n) => write!(f, "{n}"),
        }
    }
}

impl From<AssignStatement> for Statement {
    fn from(assign: AssignStatement) -> Self {
        Statement::Assign(Box::new(assign))
    }
}

impl From<Block> for Statement {
    fn from(block: Block) -> Self {
        Statement::Block(block)
    }
}

impl From<ConditionalStatement> for Statement {
    fn from(conditional: ConditionalStatement) -> Self {
        Statement::Conditional(conditional)
    }
}

impl From<DefinitionStatement> for Statement {
    fn from(definition: DefinitionStatement) -> Self {
        Statement::Definition(definition)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(expression: ExpressionStatement) -> Self {
        Statement::Expression(expression)
    }
}

impl From<ForLoopStatement> for Statement {
    fn from(for_loop: ForLoopStatement) -> Self {
        Statement::ForLoop(Box::new(for_loop))
    }
}

impl From<FunctionDefinition> for Statement {
    fn from(function: FunctionDefinition) -> Self {
        Statement::Function(Box::new(function))
    }
}

impl From<InstructionStatement> for Statement {
    fn from(instruction: InstructionStatement) -> Self {
        Statement::Instruction(instruction)
    }
}

impl From<LabelStatement> for Statement {
    fn from(label: LabelStatement) -> Self {
        Statement::Label(label)
    }
}

impl From<StackAssignStatement> for Statement {
    fn from(assign: StackAssignStatement) -> Self {
        Statement::StackAssign(assign)
    }
}

impl From<SwitchStatement> for Statement {
    fn from(switch: SwitchStatement) -> Self {
        Statement::Switch(switch)
    }
}
