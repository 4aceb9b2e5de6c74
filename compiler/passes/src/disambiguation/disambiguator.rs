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

use crate::{DeclarationId, ScopeId, ScopeTable};

use sable_span::Symbol;

use indexmap::{IndexMap, IndexSet};

/// The reconstructor behind [`crate::Disambiguation`].
pub struct Disambiguator<'a> {
    /// The scope table for the input tree.
    pub(crate) scope_table: &'a ScopeTable,
    /// The scopes currently entered, innermost last.
    pub(crate) scope_stack: Vec<ScopeId>,
    /// What every declaration reached so far has been renamed to.
    translations: IndexMap<DeclarationId, Symbol>,
    /// Every name issued so far.
    used_names: IndexSet<Symbol>,
}

impl<'a> Disambiguator<'a> {
    /// Initializes a new `Disambiguator` over `scope_table`.
    pub fn new(scope_table: &'a ScopeTable) -> Self {
        Self { scope_table, scope_stack: Vec::new(), translations: IndexMap::new(), used_names: IndexSet::new() }
    }

    fn current_scope(&self) -> ScopeId {
        *self.scope_stack.last().expect("a scope is entered before any name is translated")
    }

    /// Translates `name` in the current scope.
    ///
    /// The first time a declaration is reached, the shortest unused
    /// variant of its source name is chosen and recorded; every later
    /// reference to the same declaration reuses it.
    pub(crate) fn translate_name(&mut self, name: Symbol) -> Symbol {
        let declaration = self
            .scope_table
            .lookup(self.current_scope(), name)
            .unwrap_or_else(|| panic!("`{name}` does not resolve to any declaration; scope analysis is out of date"));

        if let Some(translated) = self.translations.get(&declaration) {
            return *translated;
        }

        let mut translated = name;
        let mut suffix = 0usize;
        while self.used_names.contains(&translated) {
            suffix += 1;
            translated = Symbol::intern(&format!("{name}_{suffix}"));
        }
        self.used_names.insert(translated);
        self.translations.insert(declaration, translated);
        translated
    }
}
