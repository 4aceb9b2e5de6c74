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

//! Interned identifier names.
//!
//! Every name in the IL is a [`Symbol`]: a small copyable index into the
//! session's interner. Two symbols are equal exactly when their text is
//! equal, so name comparisons all over the optimizer are integer compares.
//!
//! The interner lives in the scoped thread-local [`SessionGlobals`].
//! Drivers and tests install a session with
//! [`create_session_if_not_set_then`]; a symbol is only meaningful within
//! the session that interned it.

use fxhash::FxBuildHasher;

use indexmap::IndexSet;

use scoped_tls::scoped_thread_local;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::{cell::RefCell, fmt, rc::Rc};

/// An interned string.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    fn new(index: u32) -> Self {
        Self(index)
    }

    /// Interns `string`, returning its `Symbol`.
    ///
    /// Interning the same text twice returns the same symbol.
    pub fn intern(string: &str) -> Self {
        with_session_globals(|session_globals| session_globals.symbol_interner.intern(string))
    }

    /// Maps the symbol to the text it was interned from and applies `f`
    /// to it.
    pub fn with<F: FnOnce(&str) -> R, R>(self, f: F) -> R {
        with_session_globals(|session_globals| session_globals.symbol_interner.with(self, f))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|string| fmt::Display::fmt(string, f))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|string| fmt::Display::fmt(string, f))
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with(|string| serializer.serialize_str(string))
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        Ok(Symbol::intern(&string))
    }
}

/// The symbol interner of one session.
///
/// Strings are registered in insertion order, so symbol indices are
/// deterministic for a deterministic sequence of `intern` calls.
///
/// `RefCell` is used here to avoid `&mut` all over the compiler.
#[derive(Default)]
pub struct Interner {
    inner: RefCell<InnerInterner>,
}

/// Contains the actual data for `Interner`.
/// Modeled this way to afford an API using interior mutability.
#[derive(Default)]
struct InnerInterner {
    /// Registration of strings and symbol index allocation.
    set: IndexSet<Rc<str>, FxBuildHasher>,
}

impl Interner {
    fn intern(&self, string: &str) -> Symbol {
        let mut inner = self.inner.borrow_mut();
        if let Some(index) = inner.set.get_index_of(string) {
            return Symbol::new(index as u32);
        }
        let (index, _) = inner.set.insert_full(Rc::from(string));
        Symbol::new(index as u32)
    }

    fn with<F: FnOnce(&str) -> R, R>(&self, symbol: Symbol, f: F) -> R {
        let string = self
            .inner
            .borrow()
            .set
            .get_index(symbol.0 as usize)
            .cloned()
            .expect("the symbol was produced by this session's interner");
        f(&string)
    }
}

/// Per-session data threaded through the compiler implicitly.
#[derive(Default)]
pub struct SessionGlobals {
    /// The symbol interner.
    pub symbol_interner: Interner,
}

scoped_thread_local!(pub static SESSION_GLOBALS: SessionGlobals);

/// Runs `f` in the installed session, creating one first when none is.
pub fn create_session_if_not_set_then<R>(f: impl FnOnce(&SessionGlobals) -> R) -> R {
    if SESSION_GLOBALS.is_set() {
        SESSION_GLOBALS.with(f)
    } else {
        let session_globals = SessionGlobals::default();
        SESSION_GLOBALS.set(&session_globals, || SESSION_GLOBALS.with(f))
    }
}

/// Runs `f` with the installed session's globals.
///
/// Panics when no session is installed; see
/// [`create_session_if_not_set_then`].
pub fn with_session_globals<R>(f: impl FnOnce(&SessionGlobals) -> R) -> R {
    SESSION_GLOBALS.with(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        create_session_if_not_set_then(|_| {
            let a = Symbol::intern("balance");
            let b = Symbol::intern("balance");
            assert_eq!(a, b);
            a.with(|string| assert_eq!(string, "balance"));
        });
    }

    #[test]
    fn distinct_text_distinct_symbols() {
        create_session_if_not_set_then(|_| {
            assert_ne!(Symbol::intern("x"), Symbol::intern("x_1"));
        });
    }

    #[test]
    fn display_round_trips() {
        create_session_if_not_set_then(|_| {
            let s = Symbol::intern("mul_tmp");
            assert_eq!(s.to_string(), "mul_tmp");
        });
    }

    #[test]
    #[should_panic(expected = "cannot access a scoped thread local variable without calling `set` first")]
    fn interning_outside_a_session_panics() {
        let _ = Symbol::intern("stray");
    }
}
