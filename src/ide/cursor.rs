//! Cursor helpers shared by the IDE features.
//!
//! Positions arrive as 0-indexed line/byte-column pairs; the text helpers
//! in `core::text_utils` work on character indices, so conversion happens
//! here in one place.

use crate::core::text_utils::{extract_command_at_cursor, extract_word_at_cursor};
use crate::syntax::SyntaxFile;

/// The source line at `line`, without its trailing newline.
pub(super) fn line_text(syntax_file: &SyntaxFile, line: u32) -> Option<String> {
    let text = syntax_file.source_text();
    let range = syntax_file.line_index().line_range(line)?;
    Some(text[range].to_string())
}

/// Character position of a byte column within `line`.
///
/// Columns that land inside a multi-byte character or past the end clamp
/// to the end of the line.
pub(super) fn char_position(line: &str, col: u32) -> usize {
    match line.get(..col as usize) {
        Some(prefix) => prefix.chars().count(),
        None => line.chars().count(),
    }
}

/// The command name under the cursor, including its backslash.
pub(super) fn command_at(syntax_file: &SyntaxFile, line: u32, col: u32) -> Option<String> {
    let text = line_text(syntax_file, line)?;
    let position = char_position(&text, col);
    extract_command_at_cursor(&text, position)
}

/// The bare word under the cursor (environment names, file stems).
pub(super) fn word_at(syntax_file: &SyntaxFile, line: u32, col: u32) -> Option<String> {
    let text = line_text(syntax_file, line)?;
    let position = char_position(&text, col);
    extract_word_at_cursor(&text, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::FileExtension;

    #[test]
    fn test_command_at_cursor() {
        let syntax_file = SyntaxFile::new("first line\n\\textbf{word}\n", FileExtension::Tex);

        assert_eq!(command_at(&syntax_file, 1, 0), Some("\\textbf".to_string()));
        assert_eq!(command_at(&syntax_file, 1, 4), Some("\\textbf".to_string()));
        assert_eq!(command_at(&syntax_file, 1, 9), None);
        assert_eq!(command_at(&syntax_file, 0, 0), None);
        assert_eq!(command_at(&syntax_file, 9, 0), None);
    }

    #[test]
    fn test_word_at_cursor() {
        let syntax_file = SyntaxFile::new("\\begin{figure}\n", FileExtension::Tex);

        assert_eq!(word_at(&syntax_file, 0, 8), Some("figure".to_string()));
        assert_eq!(word_at(&syntax_file, 0, 6), None);
    }

    #[test]
    fn test_char_position_multibyte() {
        // "ü" is two bytes; byte column 5 sits after it
        let line = "a \\ü b";
        assert_eq!(char_position(line, 0), 0);
        assert_eq!(char_position(line, 5), 4);
        // Mid-character byte columns clamp to the line end
        assert_eq!(char_position(line, 4), 6);
    }
}
