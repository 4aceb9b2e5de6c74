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

#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod common;
pub use common::*;

pub mod expressions;
pub use expressions::*;

pub mod passes;
pub use passes::*;

pub mod statements;
pub use statements::*;

use sable_errors::{AstError, Result};

/// The abstract syntax tree of one IL program.
///
/// The root of a program is a [`Block`]; the [`Ast`] wrapper is what the
/// parser hands to the optimizer and the optimizer hands to the back end.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Ast {
    pub ast: Block,
}

impl Ast {
    /// Creates a new AST from a given root block.
    pub fn new(block: Block) -> Self {
        Self { ast: block }
    }

    /// Returns a reference to the inner root block.
    pub fn as_repr(&self) -> &Block {
        &self.ast
    }

    /// Consumes the AST, returning the inner root block.
    pub fn into_repr(self) -> Block {
        self.ast
    }

    /// Serializes the AST into a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.ast)
            .map_err(|e| AstError::failed_to_convert_ast_to_json_string(e))?)
    }

    /// Converts the AST into a JSON value.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.ast).map_err(|e| AstError::failed_to_convert_ast_to_json_value(e))?)
    }
}

impl std::fmt::Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ast)
    }
}
