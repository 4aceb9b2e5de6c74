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

use sable_span::Symbol;

use indexmap::IndexSet;

use std::cell::RefCell;

/// A source of fresh variable names.
///
/// The seen-set is grow-only: a name handed out once is never handed out
/// again. All fresh names a pass needs must come from its one dispenser,
/// or global uniqueness does not hold.
///
/// `RefCell` is used here to avoid `&mut` all over the compiler.
#[derive(Clone, Debug, Default)]
pub struct NameDispenser {
    inner: RefCell<NameDispenserInner>,
}

impl NameDispenser {
    /// Creates a dispenser that considers every name in `names` taken.
    pub fn seed(names: impl IntoIterator<Item = Symbol>) -> Self {
        Self { inner: RefCell::new(NameDispenserInner { used: names.into_iter().collect() }) }
    }

    /// Returns `prefix` if it is still unused, otherwise the first of
    /// `prefix_1`, `prefix_2`, … that is. The returned name is recorded
    /// as used.
    pub fn fresh(&self, prefix: Symbol) -> Symbol {
        self.inner.borrow_mut().fresh(prefix)
    }
}

/// Contains the actual data for `NameDispenser`.
/// Modeled this way to afford an API using interior mutability.
#[derive(Clone, Debug, Default)]
struct NameDispenserInner {
    used: IndexSet<Symbol>,
}

impl NameDispenserInner {
    fn fresh(&mut self, prefix: Symbol) -> Symbol {
        let mut name = prefix;
        let mut suffix = 0usize;
        while self.used.contains(&name) {
            suffix += 1;
            name = Symbol::intern(&format!("{prefix}_{suffix}"));
        }
        self.used.insert(name);
        name
    }
}
