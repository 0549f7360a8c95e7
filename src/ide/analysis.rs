//! AnalysisHost and Analysis — unified state management for IDE features.
//!
//! The `AnalysisHost` owns all mutable state and provides `Analysis` snapshots
//! for querying. This pattern ensures consistent reads across multiple queries.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new();
//!
//! // Apply file changes
//! host.set_file_content("main.tex", content);
//!
//! // Get a snapshot for queries
//! let analysis = host.analysis();
//! let hover = analysis.hover(file_id, line, col);
//! let symbols = analysis.document_symbols(file_id);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::base::FileId;
use crate::hir::{
    DefinitionIndex, Diagnostic, codes, duplicate_definitions, extract_definitions,
    syntax_diagnostics,
};
use crate::parser::SyntaxError;
use crate::syntax::{FileExtension, SyntaxFile};

use super::{
    CompletionItem, DocumentLink, FoldingRange, GotoResult, HoverResult, ReferenceResult,
    SymbolInfo,
};

/// Owns all mutable state for the IDE layer.
///
/// Apply changes via `set_file_content()` and `remove_file()`,
/// then get a consistent snapshot via `analysis()`.
pub struct AnalysisHost {
    /// Parsed files keyed by path.
    files: HashMap<PathBuf, SyntaxFile>,
    /// Definition index built from the parsed files.
    index: DefinitionIndex,
    /// Map from file path to FileId.
    file_id_map: HashMap<String, FileId>,
    /// Reverse map from FileId to file path.
    file_path_map: HashMap<FileId, String>,
    /// Whether the index needs rebuilding.
    index_dirty: bool,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost.
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            index: DefinitionIndex::new(),
            file_id_map: HashMap::new(),
            file_path_map: HashMap::new(),
            index_dirty: false,
        }
    }

    /// Set the content of a file, parsing it and storing the result.
    ///
    /// The file's extension picks the dialect; unknown extensions parse as
    /// plain `.tex`. Returns parse errors if any.
    pub fn set_file_content(&mut self, path: &str, content: &str) -> Vec<SyntaxError> {
        let extension = FileExtension::from_path(Path::new(path)).unwrap_or(FileExtension::Tex);
        let syntax_file = SyntaxFile::new(content, extension);
        let errors = syntax_file.errors().to_vec();

        self.files.insert(PathBuf::from(path), syntax_file);
        self.index_dirty = true;
        errors
    }

    /// Update or add a file with pre-parsed content.
    /// Used when the caller already has a parsed SyntaxFile.
    pub fn set_file(&mut self, path: PathBuf, file: SyntaxFile) {
        self.files.insert(path, file);
        self.index_dirty = true;
    }

    /// Remove a file from storage.
    pub fn remove_file(&mut self, path: &str) {
        self.files.remove(Path::new(path));
        self.index_dirty = true;
    }

    /// Check if a file exists in storage.
    pub fn has_file(&self, path: &str) -> bool {
        self.files.contains_key(Path::new(path))
    }

    /// Get access to the parsed files.
    pub fn files(&self) -> &HashMap<PathBuf, SyntaxFile> {
        &self.files
    }

    /// Get the number of files loaded.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Mark the index as needing rebuild (call after external changes).
    pub fn mark_dirty(&mut self) {
        self.index_dirty = true;
    }

    /// Rebuild the definition index from the current files.
    ///
    /// This is called automatically by `analysis()` if the index is dirty.
    pub fn rebuild_index(&mut self) {
        self.file_id_map.clear();
        self.file_path_map.clear();

        // Sorted paths keep FileId assignment and index order stable across
        // rebuilds
        let mut paths: Vec<&PathBuf> = self.files.keys().collect();
        paths.sort();

        for (i, path) in paths.iter().enumerate() {
            let path_str = path.to_string_lossy().to_string();
            let file_id = FileId::new(i as u32);
            self.file_id_map.insert(path_str.clone(), file_id);
            self.file_path_map.insert(file_id, path_str);
        }

        let mut new_index = DefinitionIndex::new();
        for (i, path) in paths.iter().enumerate() {
            let file_id = FileId::new(i as u32);
            if let Some(syntax_file) = self.files.get(*path) {
                new_index.add_extraction(file_id, extract_definitions(file_id, syntax_file));
            }
        }

        debug!(
            "rebuilt index with {} symbols from {} files",
            new_index.len(),
            self.files.len()
        );

        self.index = new_index;
        self.index_dirty = false;
    }

    /// Get a consistent snapshot for querying.
    ///
    /// If the index is dirty, it will be rebuilt first.
    pub fn analysis(&mut self) -> Analysis<'_> {
        if self.index_dirty {
            self.rebuild_index();
        }

        Analysis {
            index: &self.index,
            files: &self.files,
            file_id_map: &self.file_id_map,
            file_path_map: &self.file_path_map,
        }
    }

    /// Get the FileId for a path, if it exists.
    pub fn get_file_id(&self, path: &str) -> Option<FileId> {
        self.file_id_map.get(path).copied()
    }

    /// Get the path for a FileId, if it exists.
    pub fn get_file_path(&self, file_id: FileId) -> Option<&str> {
        self.file_path_map.get(&file_id).map(|s| s.as_str())
    }
}

/// An immutable snapshot of the analysis state.
///
/// All IDE queries go through this struct to ensure consistent results.
pub struct Analysis<'a> {
    index: &'a DefinitionIndex,
    files: &'a HashMap<PathBuf, SyntaxFile>,
    file_id_map: &'a HashMap<String, FileId>,
    file_path_map: &'a HashMap<FileId, String>,
}

impl<'a> Analysis<'a> {
    fn syntax_file(&self, file_id: FileId) -> Option<&'a SyntaxFile> {
        let path = self.file_path_map.get(&file_id)?;
        self.files.get(Path::new(path))
    }

    /// Get hover information at a position.
    pub fn hover(&self, file_id: FileId, line: u32, col: u32) -> Option<HoverResult> {
        let syntax_file = self.syntax_file(file_id)?;
        super::hover(self.index, syntax_file, line, col)
    }

    /// Go to definition at a position.
    pub fn goto_definition(&self, file_id: FileId, line: u32, col: u32) -> GotoResult {
        match self.syntax_file(file_id) {
            Some(syntax_file) => super::goto_definition(self.index, syntax_file, line, col),
            None => GotoResult::empty(),
        }
    }

    /// Find all references to the command or environment at a position.
    pub fn find_references(
        &self,
        file_id: FileId,
        line: u32,
        col: u32,
        include_declaration: bool,
    ) -> ReferenceResult {
        let mut files: Vec<(FileId, &SyntaxFile)> = self
            .file_id_map
            .iter()
            .filter_map(|(path, &id)| self.files.get(Path::new(path)).map(|f| (id, f)))
            .collect();
        files.sort_by_key(|(id, _)| *id);

        super::find_references(self.index, &files, file_id, line, col, include_declaration)
    }

    /// Get completions at a position.
    pub fn completions(&self, file_id: FileId, line: u32, col: u32) -> Vec<CompletionItem> {
        match self.syntax_file(file_id) {
            Some(syntax_file) => super::completions(self.index, syntax_file, line, col),
            None => Vec::new(),
        }
    }

    /// Get all symbols in a document, including sections.
    pub fn document_symbols(&self, file_id: FileId) -> Vec<SymbolInfo> {
        super::document_symbols(self.index, file_id)
    }

    /// Search for definitions across the workspace.
    pub fn workspace_symbols(&self, query: Option<&str>) -> Vec<SymbolInfo> {
        super::workspace_symbols(self.index, query)
    }

    /// Get document links for the include commands in a file.
    pub fn document_links(&self, file_id: FileId) -> Vec<DocumentLink> {
        super::document_links(self.index, file_id, self.file_id_map)
    }

    /// Get folding ranges for a file.
    pub fn folding_ranges(&self, file_id: FileId) -> Vec<FoldingRange> {
        match self.syntax_file(file_id) {
            Some(syntax_file) => super::folding_ranges(syntax_file),
            None => Vec::new(),
        }
    }

    /// Get all diagnostics for a file.
    ///
    /// Combines the parser's own errors with workspace checks: duplicate
    /// definitions and unresolved `\input`/`\include` targets. Package and
    /// class targets never warn since they usually live outside the
    /// workspace.
    pub fn diagnostics(&self, file_id: FileId) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if let Some(syntax_file) = self.syntax_file(file_id) {
            diagnostics.extend(syntax_diagnostics(file_id, syntax_file));
        }

        diagnostics.extend(
            duplicate_definitions(self.index)
                .into_iter()
                .filter(|d| d.file == file_id),
        );

        diagnostics.extend(self.unresolved_includes(file_id));

        diagnostics
    }

    fn unresolved_includes(&self, file_id: FileId) -> Vec<Diagnostic> {
        self.index
            .file_includes(file_id)
            .iter()
            .filter(|include| {
                matches!(
                    include.command.as_ref(),
                    "\\input" | "\\include" | "\\includeonly"
                )
            })
            .filter(|include| {
                super::document_links::resolve_include(
                    self.file_id_map,
                    &include.target,
                    &include.command,
                )
                .is_none()
            })
            .map(|include| {
                Diagnostic::warning(
                    file_id,
                    include.start_line,
                    include.start_col,
                    format!("included file '{}' not found in the workspace", include.target),
                )
                .with_span(include.end_line, include.end_col)
                .with_code(codes::UNRESOLVED_INCLUDE)
            })
            .collect()
    }

    /// Get the definition index.
    pub fn index(&self) -> &DefinitionIndex {
        self.index
    }

    /// Get the file ID map.
    pub fn file_id_map(&self) -> &HashMap<String, FileId> {
        self.file_id_map
    }

    /// Get the file path for a FileId.
    pub fn get_file_path(&self, file_id: FileId) -> Option<&str> {
        self.file_path_map.get(&file_id).map(|s| s.as_str())
    }

    /// Get the FileId for a path.
    pub fn get_file_id(&self, path: &str) -> Option<FileId> {
        self.file_id_map.get(path).copied()
    }
}
