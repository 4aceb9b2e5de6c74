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

use crate::MessageCode;

/// The AST error type.
pub mod ast;
pub use ast::*;

/// The umbrella error type for the Sable toolchain.
#[derive(Clone, Debug, thiserror::Error)]
pub enum SableError {
    /// An error from the `sable-ast` crate.
    #[error(transparent)]
    AstError(#[from] AstError),
}

impl MessageCode for SableError {
    fn exit_code(&self) -> i32 {
        match self {
            SableError::AstError(error) => error.exit_code(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            SableError::AstError(error) => error.error_code(),
        }
    }
}

/// The result type used across the Sable toolchain.
pub type Result<T, E = SableError> = core::result::Result<T, E>;
