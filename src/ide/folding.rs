//! Folding ranges for environments.

use crate::parser::AstNode;
use crate::syntax::SyntaxFile;

/// A foldable region of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldingRange {
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
}

/// Get folding ranges for a file.
///
/// Each environment folds from its `\begin` to its `\end`. Nested
/// environments produce nested ranges; results are in source order.
pub fn folding_ranges(syntax_file: &SyntaxFile) -> Vec<FoldingRange> {
    let Some(source_file) = syntax_file.source_file() else {
        return Vec::new();
    };
    let line_index = syntax_file.line_index();

    source_file
        .environments()
        .map(|environment| {
            let range = environment.syntax().text_range();
            let start = line_index.line_col(range.start());
            let end = line_index.line_col(range.end());
            FoldingRange {
                start_line: start.line,
                start_col: start.col,
                end_line: end.line,
                end_col: end.col,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::FileExtension;

    #[test]
    fn test_environment_folds() {
        let source = "\\begin{figure}\ncontent\n\\end{figure}\n";
        let syntax_file = SyntaxFile::new(source, FileExtension::Tex);

        let ranges = folding_ranges(&syntax_file);

        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].start_line, 0);
        assert_eq!(ranges[0].end_line, 2);
    }

    #[test]
    fn test_nested_environments_fold() {
        let source = "\\begin{figure}\n\\begin{center}\nx\n\\end{center}\n\\end{figure}\n";
        let syntax_file = SyntaxFile::new(source, FileExtension::Tex);

        let ranges = folding_ranges(&syntax_file);

        assert_eq!(ranges.len(), 2);
        // Outer before inner, in source order
        assert_eq!(ranges[0].start_line, 0);
        assert_eq!(ranges[0].end_line, 4);
        assert_eq!(ranges[1].start_line, 1);
        assert_eq!(ranges[1].end_line, 3);
    }

    #[test]
    fn test_no_environments_no_folds() {
        let syntax_file = SyntaxFile::new("just text\n", FileExtension::Tex);

        assert!(folding_ranges(&syntax_file).is_empty());
    }
}
