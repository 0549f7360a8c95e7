//! Workspace-wide definition index.
//!
//! Symbols live in a flat arena; the name and file maps hold indices into
//! it. Removing a file drops its map entries but keeps the arena slots, so
//! the arena grows until the host rebuilds the index from scratch.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::FileId;

use super::symbols::{DefinitionSymbol, ExtractionResult, IncludeRef};

/// Index into the symbol arena.
pub type SymbolIdx = usize;

/// All definitions and include references known for the current file set.
#[derive(Clone, Debug, Default)]
pub struct DefinitionIndex {
    /// Arena of all symbols ever added.
    symbols: Vec<DefinitionSymbol>,
    /// Name → symbol indices, iterated in insertion order.
    by_name: IndexMap<Arc<str>, Vec<SymbolIdx>>,
    /// File → symbol indices.
    by_file: FxHashMap<FileId, Vec<SymbolIdx>>,
    /// File → include references.
    includes_by_file: FxHashMap<FileId, Vec<IncludeRef>>,
}

impl DefinitionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the indexed contents of a file.
    pub fn add_file(
        &mut self,
        file: FileId,
        symbols: Vec<DefinitionSymbol>,
        includes: Vec<IncludeRef>,
    ) {
        self.remove_file(file);

        let mut indices = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let idx = self.symbols.len();
            self.by_name
                .entry(symbol.name.clone())
                .or_default()
                .push(idx);
            self.symbols.push(symbol);
            indices.push(idx);
        }
        self.by_file.insert(file, indices);
        self.includes_by_file.insert(file, includes);
    }

    /// Replace a file's contents from an extraction result.
    pub fn add_extraction(&mut self, file: FileId, result: ExtractionResult) {
        self.add_file(file, result.symbols, result.includes);
    }

    /// Drop a file's entries from the maps.
    ///
    /// Arena slots stay behind until the next full rebuild.
    pub fn remove_file(&mut self, file: FileId) {
        if let Some(indices) = self.by_file.remove(&file) {
            for idx in indices {
                let name = self.symbols[idx].name.clone();
                if let Some(entries) = self.by_name.get_mut(&name) {
                    entries.retain(|&i| i != idx);
                    if entries.is_empty() {
                        self.by_name.shift_remove(&name);
                    }
                }
            }
        }
        self.includes_by_file.remove(&file);
    }

    /// All live definitions of `name`, in insertion order.
    pub fn definitions_of(&self, name: &str) -> Vec<&DefinitionSymbol> {
        self.by_name
            .get(name)
            .map(|indices| indices.iter().map(|&i| &self.symbols[i]).collect())
            .unwrap_or_default()
    }

    /// All symbols extracted from `file`, in source order.
    pub fn file_symbols(&self, file: FileId) -> Vec<&DefinitionSymbol> {
        self.by_file
            .get(&file)
            .map(|indices| indices.iter().map(|&i| &self.symbols[i]).collect())
            .unwrap_or_default()
    }

    /// Include references found in `file`.
    pub fn file_includes(&self, file: FileId) -> &[IncludeRef] {
        self.includes_by_file
            .get(&file)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over every live symbol.
    pub fn all_symbols(&self) -> impl Iterator<Item = &DefinitionSymbol> {
        self.by_file.values().flatten().map(|&i| &self.symbols[i])
    }

    /// Names with at least one live definition, in insertion order.
    pub fn defined_names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.by_name.keys()
    }

    /// Files that currently contribute to the index.
    pub fn files(&self) -> impl Iterator<Item = FileId> + '_ {
        self.by_file.keys().copied()
    }

    /// Number of live symbols.
    pub fn len(&self) -> usize {
        self.by_file.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
