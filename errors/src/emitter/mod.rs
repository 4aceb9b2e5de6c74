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

//! A buffering error emitter.

use crate::{Result, SableError};

use std::cell::RefCell;

/// Collects errors emitted during a pass so the driver can decide when to
/// surface them.
///
/// `RefCell` is used here to avoid `&mut` all over the compiler.
#[derive(Debug, Default)]
pub struct Handler {
    inner: RefCell<HandlerInner>,
}

#[derive(Debug, Default)]
struct HandlerInner {
    errors: Vec<SableError>,
}

impl Handler {
    /// Emits the error `err`.
    pub fn emit_err(&self, err: impl Into<SableError>) {
        self.inner.borrow_mut().errors.push(err.into());
    }

    /// Returns the number of errors emitted so far.
    pub fn err_count(&self) -> usize {
        self.inner.borrow().errors.len()
    }

    /// Whether any errors have been emitted.
    pub fn had_errors(&self) -> bool {
        self.err_count() > 0
    }

    /// Returns `Err` with the most recently emitted error, if any.
    pub fn last_err(&self) -> Result<()> {
        match self.inner.borrow().errors.last() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Extracts all emitted errors, leaving the handler empty.
    pub fn take_errors(&self) -> Vec<SableError> {
        std::mem::take(&mut self.inner.borrow_mut().errors)
    }
}
