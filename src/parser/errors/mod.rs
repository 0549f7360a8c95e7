//! Error types for the LaTeX parser
//!
//! This module provides rich error diagnostics:
//! - [`ErrorCode`]: Categorized error codes (E0101, E0201, etc.)
//! - [`SyntaxError`]: Errors with location, severity, hints, and related info
//! - [`Severity`]: Error severity levels

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{RelatedInfo, Severity, SyntaxError};
