//! Line/column conversion for byte offsets.
//!
//! The parser works in byte offsets ([`TextSize`]); editors and IDE results
//! work in line/column pairs. [`LineIndex`] converts between the two.

use text_size::{TextRange, TextSize};

/// A line/column pair. Both components are 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line/column positions and back.
///
/// Built once per file text; lookups are binary searches over the
/// line start table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the first character of each line.
    line_starts: Vec<TextSize>,
    /// Total length of the indexed text.
    len: TextSize,
}

impl LineIndex {
    /// Build a line index for the given text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from(i as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a byte offset to a line/column pair.
    ///
    /// Offsets past the end of the text clamp to the last position.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        LineCol {
            line: line as u32,
            col: col.into(),
        }
    }

    /// Convert a line/column pair back to a byte offset.
    ///
    /// Returns `None` if the line does not exist.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let start = self.line_start(line_col.line)?;
        Some(start + TextSize::from(line_col.col))
    }

    /// Byte offset of the first character of `line`, if the line exists.
    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        self.line_starts.get(line as usize).copied()
    }

    /// The range covered by `line`, excluding the trailing newline.
    pub fn line_range(&self, line: u32) -> Option<TextRange> {
        let start = self.line_start(line)?;
        let end = match self.line_start(line + 1) {
            // Step back over the '\n' that terminates this line
            Some(next_start) => next_start - TextSize::from(1),
            None => self.len,
        };
        Some(TextRange::new(start, end))
    }

    /// Number of lines in the indexed text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
