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

//! Builds the [`crate::ScopeTable`] for a tree.
//!
//! Each block opens a scope. A function definition declares its name in
//! the enclosing block scope and opens a virtual scope for its arguments
//! and returns, which the body scope nests in. A for loop's pre block
//! opens the scope that governs the loop's condition, post block, and
//! body.
//!
//! The analyzer assumes a well-formed program: name resolution errors
//! were rejected before the optimizer runs.

pub mod analyzer;
pub use analyzer::*;

use crate::{CompilerState, Pass};

use sable_ast::StatementVisitor as _;
use sable_errors::Result;

/// The scope analysis pass.
pub struct ScopeAnalysis;

impl Pass for ScopeAnalysis {
    type Input = ();
    type Output = ();

    const NAME: &str = "ScopeAnalysis";

    fn do_pass(_input: Self::Input, state: &mut CompilerState) -> Result<Self::Output> {
        let mut analyzer = ScopeAnalyzer::default();
        analyzer.visit_block(&state.ast.ast);
        state.scope_table = analyzer.table;
        state.handler.last_err()?;
        Ok(())
    }
}
