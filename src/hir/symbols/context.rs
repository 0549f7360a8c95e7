//! Extraction context — file, source text, and line index for span mapping.

use std::sync::Arc;

use crate::base::{FileId, LineIndex, TextRange, TextSize};
use crate::syntax::SyntaxFile;

use super::types::SpanInfo;

/// Extraction state shared by all extraction functions.
pub(super) struct ExtractionContext {
    pub file: FileId,
    /// Full source text, for hover previews.
    pub text: String,
    /// Line index for converting byte offsets to line/column.
    pub line_index: LineIndex,
}

impl ExtractionContext {
    pub fn new(file: FileId, syntax: &SyntaxFile) -> Self {
        let text = syntax.source_text();
        let line_index = LineIndex::new(&text);
        Self {
            file,
            text,
            line_index,
        }
    }

    /// Convert a text range to a line/column span.
    pub fn span_info(&self, range: TextRange) -> SpanInfo {
        let start = self.line_index.line_col(range.start());
        let end = self.line_index.line_col(range.end());
        SpanInfo {
            start_line: start.line,
            start_col: start.col,
            end_line: end.line,
            end_col: end.col,
        }
    }

    /// The trimmed source line containing `offset`, for hover previews.
    pub fn line_preview(&self, offset: TextSize) -> Option<Arc<str>> {
        let line = self.line_index.line_col(offset).line;
        let range = self.line_index.line_range(line)?;
        let preview = self.text[range].trim();
        if preview.is_empty() {
            None
        } else {
            Some(Arc::from(preview))
        }
    }
}
