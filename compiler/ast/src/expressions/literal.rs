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

use crate::{Node, NodeID, simple_node_impl};

use sable_span::{Span, Symbol};

use serde::{Deserialize, Serialize};

use std::fmt;

/// The kind of a literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum LiteralKind {
    Number,
    Boolean,
    String,
}

/// A constant expression.
///
/// The optimizer never interprets literal values; they are carried as the
/// text the parser saw.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// The literal text, e.g. `42` or `true`.
    pub value: Symbol,
    /// The kind of the literal.
    pub kind: LiteralKind,
    /// A span locating where the literal occurred in the source.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

simple_node_impl!(Literal);

impl Literal {
    /// Constructs a number literal with a dummy span.
    pub fn number(value: Symbol, id: NodeID) -> Self {
        Self { value, kind: LiteralKind::Number, span: Span::default(), id }
    }

    /// Constructs a boolean literal with a dummy span.
    pub fn boolean(value: Symbol, id: NodeID) -> Self {
        Self { value, kind: LiteralKind::Boolean, span: Span::default(), id }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LiteralKind::Number | LiteralKind::Boolean => write!(f, "{}", self.value),
            LiteralKind::String => write!(f, "\"{}\"", self.value),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
