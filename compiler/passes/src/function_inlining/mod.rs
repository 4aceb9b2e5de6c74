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

//! Inlines arbitrary user functions at statement level.
//!
//! A call `f(a₁, …, aₙ)` to a single-return function is realized in the
//! enclosing block as a prefix of statements: one `let vᵢ := aᵢ` binding
//! per argument, an uninitialized `let r'` for the return slot, and a copy
//! of the callee's body with parameters, the return variable, and every
//! local renamed fresh. The call expression itself becomes a reference to
//! `r'`. Argument bindings are produced in reverse index order with each
//! argument's own prefix in front of its binding, which keeps the bound
//! sequence evaluating in the IL's argument order even when arguments were
//! themselves inlined.
//!
//! Calls inside a function's own body are never expanded while that body
//! is being processed, so recursion cannot unfold. Conditions and switch
//! discriminants are not descended into, since the enclosing block cannot
//! receive a prefix for those positions.
//!
//! Requires globally unique names, i.e. disambiguated input. Function
//! definitions stay in the tree; removing unreferenced ones is dead-code
//! elimination's business, not this pass's.

pub mod ast;

pub mod body_copier;
pub use body_copier::*;

pub mod inliner;
pub use inliner::*;

use crate::{CompilerState, Pass};

use sable_ast::StatementReconstructor as _;
use sable_errors::Result;

/// The statement-level inlining pass.
pub struct FunctionInlining;

impl Pass for FunctionInlining {
    type Input = ();
    type Output = ();

    const NAME: &str = "FunctionInlining";

    fn do_pass(_input: Self::Input, state: &mut CompilerState) -> Result<Self::Output> {
        let mut ast = std::mem::take(&mut state.ast);
        let mut visitor = FunctionInliner::new(&state.node_builder, &ast.ast);
        ast.ast = visitor.reconstruct_block(ast.ast).0;
        state.handler.last_err()?;
        state.ast = ast;
        Ok(())
    }
}
