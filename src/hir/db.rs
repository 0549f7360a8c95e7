//! Salsa database definition and queries.

use std::sync::Arc;

use crate::base::FileId;
use crate::syntax::SyntaxFile;
use crate::syntax::file::FileExtension;

use super::symbols::{ExtractionResult, extract_definitions};

// ============================================================================
// INPUTS
// ============================================================================

/// Input: The raw text content of a file.
///
/// Set this explicitly when a file is opened or changed.
#[salsa::input]
pub struct FileText {
    pub file: FileId,
    #[return_ref]
    pub text: String,
    pub extension: FileExtension,
}

// ============================================================================
// DATABASE
// ============================================================================

/// The root Salsa database for HIR operations.
///
/// This provides memoization for parsing and definition extraction. All
/// queries are automatically invalidated when their inputs change.
#[salsa::db]
#[derive(Default, Clone)]
pub struct RootDatabase {
    storage: salsa::Storage<Self>,
}

#[salsa::db]
impl salsa::Database for RootDatabase {
    fn salsa_event(&self, _event: &dyn Fn() -> salsa::Event) {
        // Default no-op implementation
    }
}

impl RootDatabase {
    /// Create a new, empty database.
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// PARSE RESULT
// ============================================================================

/// Parse outcome for one file.
///
/// The parser is error-tolerant, so a tree is always produced; `success`
/// records whether it came out clean.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseResult {
    /// No errors were reported.
    pub success: bool,
    /// Formatted parse errors, in source order.
    pub errors: Vec<String>,
    /// The parsed file, errors and all.
    pub syntax_file: Arc<SyntaxFile>,
}

// Manual Eq impl for Salsa tracking
impl Eq for ParseResult {}

impl ParseResult {
    /// Wrap a parsed file, collecting its error messages.
    pub fn new(syntax_file: SyntaxFile) -> Self {
        let errors: Vec<String> = syntax_file.errors().iter().map(|e| e.format()).collect();
        Self {
            success: errors.is_empty(),
            errors,
            syntax_file: Arc::new(syntax_file),
        }
    }

    /// Check if parsing produced a clean tree.
    pub fn is_ok(&self) -> bool {
        self.success
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

// ============================================================================
// TRACKED QUERIES
// ============================================================================

/// Parse a file into a lossless tree.
///
/// This is a tracked Salsa query - results are memoized and automatically
/// invalidated when the input `FileText` changes.
#[salsa::tracked]
pub fn parse_file(db: &dyn salsa::Database, file_text: FileText) -> ParseResult {
    let text = file_text.text(db);
    let extension = file_text.extension(db);
    ParseResult::new(SyntaxFile::new(text, extension))
}

/// Extract definitions from an already parsed file.
///
/// This is a pure function so it composes with both the tracked queries
/// and callers that hold a [`SyntaxFile`] directly.
pub fn file_definitions(file: FileId, syntax_file: &SyntaxFile) -> ExtractionResult {
    extract_definitions(file, syntax_file)
}

/// Extract definitions from a file given its text.
///
/// This is a tracked Salsa query that combines parsing + extraction.
/// Results are memoized per-file.
#[salsa::tracked]
pub fn file_definitions_from_text(
    db: &dyn salsa::Database,
    file_text: FileText,
) -> ExtractionResult {
    let file = file_text.file(db);
    let result = parse_file(db, file_text);
    file_definitions(file, &result.syntax_file)
}
