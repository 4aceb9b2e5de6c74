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

use crate::{Block, Expression, Node, NodeID, simple_node_impl};

use sable_span::Span;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A loop `for { pre } condition { post } { body }`.
///
/// Names declared in the pre block are visible in the condition, the post
/// block and the body.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ForLoopStatement {
    /// The initialization block.
    pub pre: Block,
    /// The continuation condition.
    pub condition: Expression,
    /// The block run after each iteration.
    pub post: Block,
    /// The loop body.
    pub body: Block,
    /// A span locating where the statement occurred in the source.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

simple_node_impl!(ForLoopStatement);

impl fmt::Display for ForLoopStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for {} {} {} {}", self.pre, self.condition, self.post, self.body)
    }
}
