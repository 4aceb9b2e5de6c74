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

//! Inlines calls to single-expression functions directly at their call
//! sites.
//!
//! A function qualifies when its body is exactly `r := <expression>` for
//! its single return variable `r`, and the expression references neither
//! `r` nor the function itself. A qualifying call is replaced by the
//! function's body expression with parameters substituted by the call
//! arguments, but only when every argument is movable, since substitution
//! duplicates or drops argument occurrences.
//!
//! Calls in the condition of an `if`, the discriminant of a `switch`, or
//! the condition of a `for` are not inlined; their bodies still are.
//!
//! Requires globally unique names, i.e. disambiguated input.

pub mod analysis;
pub use analysis::*;

pub mod ast;

pub mod inliner;
pub use inliner::*;

use crate::{CompilerState, Pass};

use sable_ast::StatementReconstructor as _;
use sable_errors::Result;

/// The expression-level inlining pass.
pub struct ExpressionInlining;

impl Pass for ExpressionInlining {
    type Input = ();
    type Output = ();

    const NAME: &str = "ExpressionInlining";

    fn do_pass(_input: Self::Input, state: &mut CompilerState) -> Result<Self::Output> {
        let mut ast = std::mem::take(&mut state.ast);
        let inlinable = InlinableFunctionFilter::run(&ast.ast);
        let mut visitor = ExpressionInliner::new(inlinable);
        ast.ast = visitor.reconstruct_block(ast.ast).0;
        state.handler.last_err()?;
        state.ast = ast;
        Ok(())
    }
}
