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

use sable_ast::NodeID;
use sable_span::Symbol;

use indexmap::IndexMap;

/// An index into the scope arena of a [`ScopeTable`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ScopeId(usize);

/// The stable identity of one declaration site.
///
/// Every reference that resolves to the same declaration yields the same
/// `DeclarationId`, which is what lets the disambiguator rename shadowed
/// names coherently: the translation table is keyed on declarations, not
/// on source names.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DeclarationId(usize);

/// One scope: the names it declares and the scope it nests in.
#[derive(Clone, Debug, Default)]
struct Scope {
    parent: Option<ScopeId>,
    declarations: IndexMap<Symbol, DeclarationId>,
}

/// The scope information for one tree, keyed on node identity.
///
/// Every block maps to a scope; every function definition additionally
/// maps to the virtual scope holding its arguments and returns. The table
/// is a side-table on `NodeID`s; AST nodes never point at declarations.
#[derive(Clone, Debug, Default)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
    block_scopes: IndexMap<NodeID, ScopeId>,
    function_scopes: IndexMap<NodeID, ScopeId>,
    next_declaration: usize,
}

impl ScopeTable {
    /// Creates a new scope nested in `parent`.
    pub fn new_scope(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope { parent, declarations: IndexMap::new() });
        id
    }

    /// Registers a declaration of `name` in `scope`, returning its
    /// stable identity.
    pub fn declare(&mut self, scope: ScopeId, name: Symbol) -> DeclarationId {
        let declaration = DeclarationId(self.next_declaration);
        self.next_declaration += 1;
        self.scopes[scope.0].declarations.insert(name, declaration);
        declaration
    }

    /// Associates a block node with its scope.
    pub fn bind_block(&mut self, block_id: NodeID, scope: ScopeId) {
        self.block_scopes.insert(block_id, scope);
    }

    /// Associates a function definition node with its virtual
    /// argument/return scope.
    pub fn bind_function(&mut self, function_id: NodeID, scope: ScopeId) {
        self.function_scopes.insert(function_id, scope);
    }

    /// The scope of the block with id `block_id`.
    pub fn block_scope(&self, block_id: NodeID) -> Option<ScopeId> {
        self.block_scopes.get(&block_id).copied()
    }

    /// The virtual argument/return scope of the function definition with
    /// id `function_id`.
    pub fn function_scope(&self, function_id: NodeID) -> Option<ScopeId> {
        self.function_scopes.get(&function_id).copied()
    }

    /// Resolves `name` in `scope`, walking outward through parents.
    pub fn lookup(&self, scope: ScopeId, name: Symbol) -> Option<DeclarationId> {
        let mut current = Some(scope);
        while let Some(scope) = current {
            let scope = &self.scopes[scope.0];
            if let Some(declaration) = scope.declarations.get(&name) {
                return Some(*declaration);
            }
            current = scope.parent;
        }
        None
    }
}
