//! Diagnostics — parse errors and workspace checks mapped to file positions.
//!
//! The parser reports errors in byte offsets; this module turns them into
//! line/column diagnostics and adds workspace-level checks over the
//! definition index.

use std::sync::Arc;

use crate::base::FileId;
use crate::parser::Severity;
use crate::syntax::SyntaxFile;

use super::index::DefinitionIndex;
use super::symbols::SymbolKind;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// A diagnostic message with a file position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: FileId,
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
    /// Severity level.
    pub severity: Severity,
    /// Error/warning code (e.g., "E0301").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Optional related locations.
    pub related: Vec<RelatedLocation>,
}

/// A location referenced by a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelatedLocation {
    /// The file containing this location.
    pub file: FileId,
    /// Line number.
    pub line: u32,
    /// Column number.
    pub col: u32,
    /// The message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(file: FileId, line: u32, col: u32, message: impl Into<Arc<str>>) -> Self {
        Self {
            file,
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
            severity: Severity::Error,
            code: None,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(file: FileId, line: u32, col: u32, message: impl Into<Arc<str>>) -> Self {
        Self {
            file,
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Set the span (range) for this diagnostic.
    pub fn with_span(mut self, end_line: u32, end_col: u32) -> Self {
        self.end_line = end_line;
        self.end_col = end_col;
        self
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add a related location.
    pub fn with_related(mut self, info: RelatedLocation) -> Self {
        self.related.push(info);
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Workspace-level diagnostic codes.
///
/// Parse errors carry their own codes from the parser (`E0101`-`E0999`);
/// the codes here cover checks over the definition index.
pub mod codes {
    /// Command or environment defined more than once.
    pub const DUPLICATE_DEFINITION: &str = "W0001";
    /// Included file not found in the workspace.
    pub const UNRESOLVED_INCLUDE: &str = "W0002";
}

// ============================================================================
// CHECKS
// ============================================================================

/// Map the parser's errors for one file into positioned diagnostics.
pub fn syntax_diagnostics(file: FileId, syntax_file: &SyntaxFile) -> Vec<Diagnostic> {
    let line_index = syntax_file.line_index();

    syntax_file
        .errors()
        .iter()
        .map(|error| {
            let start = line_index.line_col(error.range.start());
            let end = line_index.line_col(error.range.end());
            let related = error
                .related
                .iter()
                .map(|info| {
                    let pos = line_index.line_col(info.range.start());
                    RelatedLocation {
                        file,
                        line: pos.line,
                        col: pos.col,
                        message: Arc::from(info.message.as_str()),
                    }
                })
                .collect();
            Diagnostic {
                file,
                start_line: start.line,
                start_col: start.col,
                end_line: end.line,
                end_col: end.col,
                severity: error.severity,
                code: Some(Arc::from(error.code.as_str())),
                message: Arc::from(error.message.as_str()),
                related,
            }
        })
        .collect()
}

/// Report names defined more than once across the workspace.
///
/// `\renewcommand` and `\renewenvironment` replace an existing name on
/// purpose, so only plain definitions count toward a duplicate.
pub fn duplicate_definitions(index: &DefinitionIndex) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for name in index.defined_names() {
        let defs: Vec<_> = index
            .definitions_of(name)
            .into_iter()
            .filter(|s| {
                matches!(
                    s.kind,
                    SymbolKind::CommandDefinition
                        | SymbolKind::MathOperator
                        | SymbolKind::EnvironmentDefinition
                )
            })
            .collect();
        if defs.len() < 2 {
            continue;
        }

        let first = defs[0];
        for dup in &defs[1..] {
            diagnostics.push(
                Diagnostic::warning(
                    dup.file,
                    dup.start_line,
                    dup.start_col,
                    format!("'{}' is already defined", dup.name),
                )
                .with_span(dup.end_line, dup.end_col)
                .with_code(codes::DUPLICATE_DEFINITION)
                .with_related(RelatedLocation {
                    file: first.file,
                    line: first.start_line,
                    col: first.start_col,
                    message: Arc::from(format!("first definition of '{}'", first.name)),
                }),
            );
        }
    }

    diagnostics
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics from several checks.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add several diagnostics at once.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get diagnostics for a specific file.
    pub fn diagnostics_for_file(&self, file: FileId) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.file == file).collect()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}
