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

use crate::ScopeTable;

use sable_ast::{Ast, NodeBuilder};
use sable_errors::{Result, emitter::Handler};

/// Everything that survives between passes: the tree itself plus the
/// side-tables computed for it.
///
/// Pass-local bookkeeping (dispensers, translation tables, function
/// directories) is constructed inside `do_pass` and dropped when it
/// returns; it never lives here.
#[derive(Debug, Default)]
pub struct CompilerState {
    pub ast: Ast,
    pub handler: Handler,
    pub node_builder: NodeBuilder,
    pub scope_table: ScopeTable,
}

/// A compiler pass.
///
/// Every pass has access to `CompilerState`, and may also specify
/// an `Input` and `Output`.
pub trait Pass {
    type Input;
    type Output;

    const NAME: &str;

    /// Runs the compiler pass.
    fn do_pass(input: Self::Input, state: &mut CompilerState) -> Result<Self::Output>;
}
