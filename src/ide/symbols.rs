//! Symbol listing for workspace and document views.

use std::sync::Arc;

use crate::base::FileId;
use crate::hir::{DefinitionIndex, DefinitionSymbol, SymbolKind};

/// A symbol for the workspace symbol list or document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Symbol name.
    pub name: Arc<str>,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// First line of the defining command, trimmed.
    pub detail: Option<Arc<str>>,
    /// File containing the symbol.
    pub file: FileId,
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
    /// Outline depth for sections, `None` for definitions.
    pub section_level: Option<u8>,
}

impl SymbolInfo {
    /// Create from a definition symbol.
    pub fn from_symbol(symbol: &DefinitionSymbol) -> Self {
        Self {
            name: Arc::clone(&symbol.name),
            kind: symbol.kind,
            detail: symbol.detail.clone(),
            file: symbol.file,
            start_line: symbol.start_line,
            start_col: symbol.start_col,
            end_line: symbol.end_line,
            end_col: symbol.end_col,
            section_level: symbol.section_level,
        }
    }
}

/// Get all definitions in the workspace, optionally filtered by a query.
///
/// Sections are outline entries, not definitions, so they are skipped here;
/// the query is a case-insensitive substring match. Results are sorted by
/// name.
pub fn workspace_symbols(index: &DefinitionIndex, query: Option<&str>) -> Vec<SymbolInfo> {
    let query_lower = query.map(|q| q.to_lowercase());

    let mut results: Vec<SymbolInfo> = index
        .all_symbols()
        .filter(|symbol| {
            if !symbol.kind.is_definition() {
                return false;
            }
            match &query_lower {
                Some(q) => symbol.name.to_lowercase().contains(q),
                None => true,
            }
        })
        .map(SymbolInfo::from_symbol)
        .collect();

    results.sort_by(|a, b| a.name.cmp(&b.name));
    results
}

/// Get all symbols in a specific file for the document outline.
///
/// Unlike [`workspace_symbols`] this includes sections, so the outline shows
/// the document structure alongside its definitions. Results are in source
/// order.
pub fn document_symbols(index: &DefinitionIndex, file: FileId) -> Vec<SymbolInfo> {
    let mut results: Vec<SymbolInfo> = index
        .file_symbols(file)
        .into_iter()
        .map(SymbolInfo::from_symbol)
        .collect();

    results.sort_by(|a, b| {
        a.start_line
            .cmp(&b.start_line)
            .then(a.start_col.cmp(&b.start_col))
    });

    results
}
