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

use indexmap::IndexMap;

/// The mapping from names in an original tree to new names in a renamed
/// copy.
///
/// The table is flat: the trees the inliners copy are globally
/// name-unique, so there is no shadowing left to scope.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenameTable {
    names: IndexMap<Symbol, Symbol>,
}

impl RenameTable {
    /// Maps `symbol` to `new_symbol`, replacing any previous entry.
    pub fn update(&mut self, symbol: Symbol, new_symbol: Symbol) {
        self.names.insert(symbol, new_symbol);
    }

    /// Looks up the new name for `symbol`.
    pub fn lookup(&self, symbol: Symbol) -> Option<Symbol> {
        self.names.get(&symbol).copied()
    }

    /// Loads the table with a set of entries.
    pub fn load(&mut self, entries: impl IntoIterator<Item = (Symbol, Symbol)>) {
        for (symbol, new_symbol) in entries {
            self.update(symbol, new_symbol);
        }
    }
}
