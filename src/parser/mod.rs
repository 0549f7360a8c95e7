//! Rowan-based lossless parser for LaTeX
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments, then extract an AST layer on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! HIR → Definitions, references, includes
//! ```
//!
//! ## Tree shape
//!
//! The root holds a sequence of CONTENT nodes, each wrapping exactly one
//! command, environment, group, math shell, or text run. Whitespace and
//! comments sit *between* content units at the parent level, which is what
//! makes whitespace-skipping sibling navigation on commands work.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use errors::{ErrorCode, RelatedInfo, Severity, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::{
    LatexLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
