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

//! The legacy stack form.
//!
//! Before the surface language grew expression syntax, programs were flat
//! opcode sequences with labels and stack-top assignments. The parser
//! still accepts that form, but the optimizer requires expression-form
//! input: a raw opcode at statement position is tolerated only where a
//! pass has no need to look through it, and labels and stack assignments
//! are rejected outright.

use crate::{Node, NodeID, Opcode, simple_node_impl};

use sable_span::{Span, Symbol};

use serde::{Deserialize, Serialize};

use std::fmt;

/// A bare primitive opcode at statement position, taking its operands
/// from the stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct InstructionStatement {
    /// The opcode.
    pub opcode: Opcode,
    /// A span locating where the instruction occurred in the source.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

simple_node_impl!(InstructionStatement);

impl fmt::Display for InstructionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)
    }
}

/// A jump target of the legacy stack form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LabelStatement {
    /// The label's name.
    pub name: Symbol,
    /// A span locating where the label occurred in the source.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

simple_node_impl!(LabelStatement);

impl fmt::Display for LabelStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)
    }
}

/// A stack-top assignment `=: x` of the legacy stack form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StackAssignStatement {
    /// The assigned variable's name.
    pub name: Symbol,
    /// A span locating where the assignment occurred in the source.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

simple_node_impl!(StackAssignStatement);

impl fmt::Display for StackAssignStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "=: {}", self.name)
    }
}
