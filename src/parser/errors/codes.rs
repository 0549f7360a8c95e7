//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Delimiter errors (braces, brackets, math shifts)
//! - E03xx: Environment errors (\begin/\end pairing)
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering, documentation, and IDE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors (invalid tokens)
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,

    // =========================================================================
    // E02xx: Delimiter errors (braces, brackets, math shifts)
    // =========================================================================
    /// Unclosed group `{`
    E0201,
    /// Unexpected closing brace `}`
    E0202,
    /// Unclosed optional parameter `[`
    E0203,
    /// Unterminated math shell `$`
    E0204,

    // =========================================================================
    // E03xx: Environment errors (\begin/\end pairing)
    // =========================================================================
    /// Unclosed environment (missing \end)
    E0301,
    /// Mismatched environment name in \end
    E0302,
    /// Stray \end with no open environment
    E0303,
    /// Missing environment name after \begin or \end
    E0304,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Internal parser error
    E0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0301")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "E0101",
            // Delimiters
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            // Environments
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            // Generic
            Self::E0901 => "E0901",
            Self::E0999 => "E0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 => "delimiter error",
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 => "environment error",
            Self::E0901 | Self::E0999 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "invalid character",
            // Delimiters
            Self::E0201 => "unclosed group",
            Self::E0202 => "unexpected closing brace",
            Self::E0203 => "unclosed optional parameter",
            Self::E0204 => "unterminated math",
            // Environments
            Self::E0301 => "unclosed environment",
            Self::E0302 => "mismatched environment name",
            Self::E0303 => "no matching \\begin for \\end",
            Self::E0304 => "missing environment name",
            // Generic
            Self::E0901 => "unexpected token",
            Self::E0999 => "internal parser error",
        }
    }

    /// Check if this is a delimiter pairing error
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204
        )
    }

    /// Check if this is a recoverable error (parsing can continue)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::E0999)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
