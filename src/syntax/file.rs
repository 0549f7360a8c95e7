//! Syntax file wrapper for parsed LaTeX files.
//!
//! This module provides a unified interface for working with parsed files
//! from the rowan-based parser.

use std::fmt;
use std::path::Path;

use crate::base::LineIndex;
use crate::parser::{AstNode, Parse, SourceFile, SyntaxError, parse};

/// A parsed syntax file that wraps a rowan Parse result.
#[derive(Debug, Clone)]
pub struct SyntaxFile {
    /// The underlying rowan parse result
    parse: Parse,
    /// The file extension (tex, sty, or cls)
    extension: FileExtension,
}

// Manual PartialEq implementation - two SyntaxFiles are equal if they have the
// same extension, the same structural tree, and the same errors
impl PartialEq for SyntaxFile {
    fn eq(&self, other: &Self) -> bool {
        self.extension == other.extension
            && self.parse.errors == other.parse.errors
            && self.parse.green == other.parse.green
    }
}

impl Eq for SyntaxFile {}

/// File extension type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExtension {
    /// A document source file (`.tex`)
    Tex,
    /// A package file (`.sty`)
    Sty,
    /// A document class file (`.cls`)
    Cls,
}

impl FileExtension {
    /// Determine the extension from a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "tex" => Some(Self::Tex),
            "sty" => Some(Self::Sty),
            "cls" => Some(Self::Cls),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tex => "tex",
            Self::Sty => "sty",
            Self::Cls => "cls",
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SyntaxFile {
    /// Create a new SyntaxFile from source code and extension
    pub fn new(source: &str, extension: FileExtension) -> Self {
        Self {
            parse: parse(source),
            extension,
        }
    }

    /// Create a `.tex` syntax file
    pub fn tex(source: &str) -> Self {
        Self::new(source, FileExtension::Tex)
    }

    /// Get the underlying parse result
    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    /// Get the file extension
    pub fn extension(&self) -> FileExtension {
        self.extension
    }

    /// Get the root source file AST node
    pub fn source_file(&self) -> Option<SourceFile> {
        SourceFile::cast(self.parse.syntax())
    }

    /// Check if parsing had errors
    pub fn has_errors(&self) -> bool {
        !self.parse.errors.is_empty()
    }

    /// Get parse errors
    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    /// Check if this is a package or document class file.
    ///
    /// Definitions in these files are visible to every document that loads
    /// them, which matters for reference search.
    pub fn is_class_or_style(&self) -> bool {
        matches!(self.extension, FileExtension::Sty | FileExtension::Cls)
    }

    /// Extract the file names referenced by include-style commands
    pub fn extract_includes(&self) -> Vec<String> {
        let Some(source_file) = self.source_file() else {
            return Vec::new();
        };

        source_file
            .commands()
            .filter_map(|command| command.included_file_name())
            .collect()
    }

    /// Get the source text of the file
    pub fn source_text(&self) -> String {
        self.parse.syntax().text().to_string()
    }

    /// Create a LineIndex for converting byte offsets to line/column positions
    pub fn line_index(&self) -> LineIndex {
        LineIndex::new(&self.source_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_path() {
        assert_eq!(
            FileExtension::from_path(Path::new("main.tex")),
            Some(FileExtension::Tex)
        );
        assert_eq!(
            FileExtension::from_path(Path::new("style/custom.sty")),
            Some(FileExtension::Sty)
        );
        assert_eq!(
            FileExtension::from_path(Path::new("book.cls")),
            Some(FileExtension::Cls)
        );
        assert_eq!(FileExtension::from_path(Path::new("refs.bib")), None);
        assert_eq!(FileExtension::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_syntax_file_roundtrip() {
        let source = "\\documentclass{article}\n\\begin{document}hi\\end{document}\n";
        let file = SyntaxFile::tex(source);
        assert!(!file.has_errors());
        assert_eq!(file.source_text(), source);
        assert!(file.source_file().is_some());
    }

    #[test]
    fn test_extract_includes() {
        let source = "\\documentclass{article}\n\\usepackage{amsmath}\n\\input{chapters/intro}\n\\textbf{not an include}\n";
        let file = SyntaxFile::tex(source);
        let includes = file.extract_includes();
        assert_eq!(includes, vec!["article", "amsmath", "chapters/intro"]);
    }

    #[test]
    fn test_equality_tracks_content() {
        let a = SyntaxFile::tex("\\section{One}");
        let b = SyntaxFile::tex("\\section{One}");
        let c = SyntaxFile::tex("\\section{Two}");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_is_class_or_style() {
        assert!(!SyntaxFile::tex("x").is_class_or_style());
        assert!(SyntaxFile::new("x", FileExtension::Sty).is_class_or_style());
        assert!(SyntaxFile::new("x", FileExtension::Cls).is_class_or_style());
    }
}
