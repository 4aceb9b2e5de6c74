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

use crate::{Expression, Node, NodeID, Opcode, simple_node_impl};

use sable_span::Span;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A primitive instruction in expression form: an opcode applied to an
/// ordered argument list, e.g. `add(x, 1)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicExpression {
    /// The opcode.
    pub opcode: Opcode,
    /// The arguments, in source order.
    pub arguments: Vec<Expression>,
    /// A span locating where the expression occurred in the source.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

simple_node_impl!(IntrinsicExpression);

impl fmt::Display for IntrinsicExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.opcode)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ")")
    }
}
