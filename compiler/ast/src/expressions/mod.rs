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

use crate::{Identifier, Node, NodeID};

use sable_span::Span;

use serde::{Deserialize, Serialize};

use std::fmt;

pub mod call;
pub use call::*;

pub mod intrinsic;
pub use intrinsic::*;

pub mod literal;
pub use literal::*;

/// An expression of the IL.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// A user-function call.
    Call(CallExpression),
    /// A variable or function reference.
    Identifier(Identifier),
    /// A primitive instruction applied to arguments.
    Intrinsic(IntrinsicExpression),
    /// A constant.
    Literal(Literal),
}

impl Node for Expression {
    fn span(&self) -> Span {
        match self {
            Expression::Call(call) => call.span,
            Expression::Identifier(identifier) => identifier.span,
            Expression::Intrinsic(intrinsic) => intrinsic.span,
            Expression::Literal(literal) => literal.span,
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Expression::Call(call) => call.set_span(span),
            Expression::Identifier(identifier) => identifier.set_span(span),
            Expression::Intrinsic(intrinsic) => intrinsic.set_span(span),
            Expression::Literal(literal) => literal.set_span(span),
        }
    }

    fn id(&self) -> NodeID {
        match self {
            Expression::Call(call) => call.id,
            Expression::Identifier(identifier) => identifier.id,
            Expression::Intrinsic(intrinsic) => intrinsic.id,
            Expression::Literal(literal) => literal.id,
        }
    }

    fn set_id(&mut self, id: NodeID) {
        match self {
            Expression::Call(call) => call.set_id(id),
            Expression::Identifier(identifier) => identifier.set_id(id),
            Expression::Intrinsic(intrinsic) => intrinsic.set_id(id),
            Expression::Literal(literal) => literal.set_id(id),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Call(call) => write!(f, "{call}"),
            Expression::Identifier(identifier) => write!(f, "{identifier}"),
            Expression::Intrinsic(intrinsic) => write!(f, "{intrinsic}"),
            Expression::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

impl From<CallExpression> for Expression {
    fn from(call: CallExpression) -> Self {
        Expression::Call(call)
    }
}

impl From<Identifier> for Expression {
    fn from(identifier: Identifier) -> Self {
        Expression::Identifier(identifier)
    }
}

impl From<IntrinsicExpression> for Expression {
    fn from(intrinsic: IntrinsicExpression) -> Self {
        Expression::Intrinsic(intrinsic)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}
