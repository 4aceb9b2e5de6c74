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

use crate::Backtraced;

use sable_span::Span;

use colored::Colorize;

use std::fmt;

/// A message body anchored at a source location.
#[derive(Clone, Debug)]
pub struct Formatted {
    /// The span the message points at.
    pub span: Span,
    /// Everything else.
    pub backtrace: Backtraced,
}

impl Formatted {
    /// Creates a message body pointing at `span`.
    pub fn new_from_span(
        message: impl fmt::Display,
        help: Option<String>,
        exit_code: i32,
        code_identifier: &'static str,
        span: Span,
    ) -> Self {
        Self { span, backtrace: Backtraced::new_from_backtrace(message, help, exit_code, code_identifier) }
    }

    /// The unique identifier of this message, e.g. `EAST0370001`.
    pub fn error_code(&self) -> String {
        self.backtrace.error_code()
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("Error [{}]", self.error_code());
        writeln!(f, "{}: {}", label.as_str().bold().red(), self.backtrace.message)?;
        write!(f, "    {} bytes {}", "-->".bold(), self.span)?;
        if let Some(help) = &self.backtrace.help {
            write!(f, "\n     {} {help}", "=".bold())?;
        }
        Ok(())
    }
}

impl std::error::Error for Formatted {}
