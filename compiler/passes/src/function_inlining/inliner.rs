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

use crate::{NameCollector, NameDispenser};

use sable_ast::{Block, Expression, ExpressionReconstructor as _, FunctionDefinition, NodeBuilder};
use sable_span::Symbol;

use indexmap::{IndexMap, IndexSet};

/// The reconstructor behind [`crate::FunctionInlining`].
pub struct FunctionInliner<'a> {
    /// A counter used to create unique `NodeID`s for synthesized nodes.
    pub(crate) node_builder: &'a NodeBuilder,
    /// The fresh-name source, seeded with every name in the input tree.
    pub(crate) dispenser: NameDispenser,
    /// Every function definition in the input tree, by name.
    pub(crate) functions: IndexMap<Symbol, FunctionDefinition>,
    /// The functions whose bodies are currently being processed; calls to
    /// these are not expanded.
    pub(crate) currently_inlining: IndexSet<Symbol>,
}

impl<'a> FunctionInliner<'a> {
    /// Initializes a new `FunctionInliner`: scans `block` for its names
    /// and function directory and seeds the dispenser with them.
    pub fn new(node_builder: &'a NodeBuilder, block: &Block) -> Self {
        let collector = NameCollector::collect(block);
        Self {
            node_builder,
            dispenser: NameDispenser::seed(collector.names),
            functions: collector.functions,
            currently_inlining: IndexSet::new(),
        }
    }

    /// Reconstructs call or intrinsic arguments without binding them,
    /// in reverse index order so their prefixes stack up the same way
    /// inlined bindings would.
    pub(crate) fn reconstruct_arguments(
        &mut self,
        arguments: Vec<Expression>,
    ) -> (Vec<Expression>, Vec<sable_ast::Statement>) {
        let mut prefix = Vec::new();
        let mut reconstructed: Vec<Expression> = arguments
            .into_iter()
            .rev()
            .map(|argument| {
                let (argument, argument_prefix) = self.reconstruct_expression(argument);
                prefix.extend(argument_prefix);
                argument
            })
            .collect();
        reconstructed.reverse();
        (reconstructed, prefix)
    }
}
