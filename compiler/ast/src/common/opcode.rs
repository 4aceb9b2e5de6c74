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

use serde::{Deserialize, Serialize};

use std::fmt;

/// A primitive instruction of the Sable virtual machine.
///
/// Opcodes appear in expression form (with explicit arguments) after the
/// surface language is desugared, and in raw stack form only in legacy
/// input the optimizer refuses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
    Lt,
    Gt,
    Eq,
    IsZero,
    Load,
    Store,
    SLoad,
    SStore,
    Log,
    Stop,
}

impl Opcode {
    /// The mnemonic, as written in the IL.
    pub fn as_str(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::Mod => "mod",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Xor => "xor",
            Opcode::Not => "not",
            Opcode::Shl => "shl",
            Opcode::Shr => "shr",
            Opcode::Lt => "lt",
            Opcode::Gt => "gt",
            Opcode::Eq => "eq",
            Opcode::IsZero => "iszero",
            Opcode::Load => "load",
            Opcode::Store => "store",
            Opcode::SLoad => "sload",
            Opcode::SStore => "sstore",
            Opcode::Log => "log",
            Opcode::Stop => "stop",
        }
    }

    /// Whether an instance of this instruction may be duplicated, reordered
    /// or dropped: it neither has side effects nor observes state that
    /// other instructions may change.
    pub fn is_movable(self) -> bool {
        match self {
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Mod
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Not
            | Opcode::Shl
            | Opcode::Shr
            | Opcode::Lt
            | Opcode::Gt
            | Opcode::Eq
            | Opcode::IsZero => true,
            // Memory and storage accesses observe or change machine state;
            // log and stop are pure side effects.
            Opcode::Load
            | Opcode::Store
            | Opcode::SLoad
            | Opcode::SStore
            | Opcode::Log
            | Opcode::Stop => false,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_movable() {
        assert!(Opcode::Add.is_movable());
        assert!(Opcode::IsZero.is_movable());
    }

    #[test]
    fn state_access_is_not_movable() {
        assert!(!Opcode::Load.is_movable());
        assert!(!Opcode::SStore.is_movable());
        assert!(!Opcode::Stop.is_movable());
    }
}
