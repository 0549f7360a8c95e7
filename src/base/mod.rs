//! Foundation types for the Texter toolchain.
//!
//! This module provides fundamental types used throughout the library:
//! - [`FileId`] - Interned file identifiers
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other texter modules.

mod file_id;
mod line_index;

pub use file_id::FileId;
pub use line_index::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
