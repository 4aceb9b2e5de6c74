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

use crate::{Expression, Node, NodeID, TypedName, simple_node_impl};

use sable_span::Span;

use serde::{Deserialize, Serialize};

use smallvec::SmallVec;

use std::fmt;

/// A variable declaration `let x := value`, with the initializer optional:
/// `let x` declares a zero-initialized variable.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DefinitionStatement {
    /// The declared names, in source order.
    pub variables: SmallVec<[TypedName; 1]>,
    /// The initializer, if any.
    pub value: Option<Expression>,
    /// A span locating where the statement occurred in the source.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

simple_node_impl!(DefinitionStatement);

impl fmt::Display for DefinitionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let ")?;
        for (i, variable) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{variable}")?;
        }
        match &self.value {
            Some(value) => write!(f, " := {value}"),
            None => Ok(()),
        }
    }
}
