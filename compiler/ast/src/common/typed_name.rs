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

/// The type of a declared name.
///
/// The IL's values are machine words unless the surface language asked for
/// a named type; the optimizer threads types through untouched.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// The default machine word.
    #[default]
    Word,
    /// A named surface type.
    Named(Symbol),
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Word => write!(f, "word"),
            Type::Named(name) => write!(f, "{name}"),
        }
    }
}

/// A declared name together with its type: one entry of a variable
/// declaration, a function argument, or a function return.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TypedName {
    /// The declared name.
    pub name: Symbol,
    /// The declared type.
    pub type_: Type,
    /// A span locating where the declaration occurred in the source.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

simple_node_impl!(TypedName);

impl TypedName {
    /// Constructs a word-typed name with a dummy span.
    pub fn new(name: Symbol, id: NodeID) -> Self {
        Self { name, type_: Type::default(), span: Span::default(), id }
    }
}

impl fmt::Display for TypedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_ {
            Type::Word => write!(f, "{}", self.name),
            type_ => write!(f, "{}: {type_}", self.name),
        }
    }
}

impl fmt::Debug for TypedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
