//! Text manipulation utilities for working with source code.

/// Check if a character is considered part of a word.
///
/// Uses Unicode Standard Annex #31 rules for identifier characters, which
/// covers environment names and label keys including non-ASCII text.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if a character can be part of a command name after the backslash.
///
/// LaTeX control words are ASCII letters; `@` is included because package
/// and class code conventionally uses internal `\@...` names.
#[inline]
pub fn is_command_name_character(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '@'
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of the word start
/// and `end` is the character index after the last word character.
/// Returns `None` if there is no word at the position.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() {
        return None;
    }

    if !is_word_character(chars[position]) {
        return None;
    }

    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Extract the word at the cursor position in a line of text.
///
/// Returns the word as a `String`, or `None` if there is no word at the position.
///
/// # Example
/// ```
/// use texter::core::text_utils::extract_word_at_cursor;
///
/// let line = "see section intro";
/// assert_eq!(extract_word_at_cursor(line, 5), Some("section".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 3), None); // space
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();

    if position >= chars.len() {
        return None;
    }

    let (start, end) = find_word_boundaries(&chars, position)?;

    Some(chars[start..end].iter().collect())
}

/// Extract the command name at the cursor position in a line of text.
///
/// The result includes the leading backslash. Works for control words
/// (`\section`) and control symbols (`\%`, `\\`). The cursor may sit on the
/// backslash or anywhere inside the name.
///
/// # Example
/// ```
/// use texter::core::text_utils::extract_command_at_cursor;
///
/// let line = "a \\textbf{b}";
/// assert_eq!(extract_command_at_cursor(line, 2), Some("\\textbf".to_string()));
/// assert_eq!(extract_command_at_cursor(line, 5), Some("\\textbf".to_string()));
/// assert_eq!(extract_command_at_cursor(line, 0), None);
/// ```
pub fn extract_command_at_cursor(line: &str, position: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();

    if position >= chars.len() {
        return None;
    }

    // Walk every command start on the line and test whether it covers the cursor.
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '\\' {
            i += 1;
            continue;
        }
        let start = i;
        let end = command_end(&chars, start);
        if position >= start && position < end {
            return Some(chars[start..end].iter().collect());
        }
        // A control symbol like `\\` consumes its argument character, so
        // resume scanning after the whole command.
        i = end.max(start + 1);
    }

    None
}

/// Character index one past the end of the command starting at `start`
/// (which must point at a backslash).
fn command_end(chars: &[char], start: usize) -> usize {
    let mut end = start + 1;
    if end < chars.len() && is_command_name_character(chars[end]) {
        while end < chars.len() && is_command_name_character(chars[end]) {
            end += 1;
        }
    } else if end < chars.len() {
        // Control symbol: backslash plus exactly one character
        end += 1;
    }
    end
}
