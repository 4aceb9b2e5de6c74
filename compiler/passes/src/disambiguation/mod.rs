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

//! Makes every identifier in the tree unique.
//!
//! The pass copies the tree, renaming each declaration to a name used
//! nowhere else and each reference to its declaration's new name. Which
//! declaration a reference resolves to comes from the scope table built by
//! [`crate::ScopeAnalysis`]; the translation table is keyed on declaration
//! identity, so two shadowing declarations of the same source name get two
//! different new names while every use follows its own declaration.
//!
//! Renames prefer the original name, then `name_1`, `name_2`, …, the
//! shortest variant not yet used anywhere. The traversal is depth-first
//! left-to-right, so output names are a pure function of the input tree
//! and its scope table.
//!
//! Every pass downstream of this one assumes its output: globally unique
//! names, and no legacy stack form.

pub mod ast;

pub mod disambiguator;
pub use disambiguator::*;

use crate::{CompilerState, Pass};

use sable_ast::StatementReconstructor as _;
use sable_errors::Result;

/// The disambiguation pass.
pub struct Disambiguation;

impl Pass for Disambiguation {
    type Input = ();
    type Output = ();

    const NAME: &str = "Disambiguation";

    fn do_pass(_input: Self::Input, state: &mut CompilerState) -> Result<Self::Output> {
        let mut ast = std::mem::take(&mut state.ast);
        let mut visitor = Disambiguator::new(&state.scope_table);
        ast.ast = visitor.reconstruct_block(ast.ast).0;
        state.handler.last_err()?;
        state.ast = ast;
        Ok(())
    }
}
