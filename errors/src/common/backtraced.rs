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

use colored::Colorize;

use backtrace::Backtrace;

use std::{fmt, sync::Arc};

/// A message body for errors that arise outside any source location.
///
/// Carries the backtrace taken at construction; the backtrace is rendered
/// only when `SABLE_BACKTRACE` is set, like most Rust tooling.
#[derive(Clone, Debug)]
pub struct Backtraced {
    /// The error message.
    pub message: String,
    /// An optional hint on how to proceed.
    pub help: Option<String>,
    /// The process exit code.
    pub exit_code: i32,
    /// The error code prefix, e.g. `AST`.
    pub code_identifier: &'static str,
    /// The backtrace taken when the message was constructed.
    pub backtrace: Arc<Backtrace>,
}

impl Backtraced {
    /// Creates a message body from the current backtrace.
    pub fn new_from_backtrace(
        message: impl fmt::Display,
        help: Option<String>,
        exit_code: i32,
        code_identifier: &'static str,
    ) -> Self {
        Self {
            message: message.to_string(),
            help,
            exit_code,
            code_identifier,
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// The unique identifier of this message, e.g. `EAST0370001`.
    pub fn error_code(&self) -> String {
        format!("E{}{:07}", self.code_identifier, self.exit_code)
    }
}

impl fmt::Display for Backtraced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("Error [{}]", self.error_code());
        writeln!(f, "{}: {}", label.as_str().bold().red(), self.message)?;
        if let Some(help) = &self.help {
            write!(f, " {} {help}", "=".bold())?;
        }
        if std::env::var("SABLE_BACKTRACE").is_ok() {
            write!(f, "\n{:?}", self.backtrace)?;
        }
        Ok(())
    }
}

impl std::error::Error for Backtraced {}
