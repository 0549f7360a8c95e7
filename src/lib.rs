//! # texter-base
//!
//! Core library for LaTeX parsing, command classification, and document
//! analysis.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Workspace loading from the file system
//!   ↓
//! ide       → IDE features (hover, goto-def, completion)
//!   ↓
//! hir       → Definition model with Salsa queries
//!   ↓
//! syntax    → SyntaxFile wrapper, file extensions
//!   ↓
//! parser    → Logos lexer, rowan syntax tree, typed AST
//!   ↓
//! core      → Command classification tables, text helpers
//!   ↓
//! base      → Primitives (FileId, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → parser → syntax → hir → ide →
// project)
// ============================================================================

/// Foundation types: FileId, LineIndex, TextRange
pub mod base;

/// Command classification tables and cursor text helpers
pub mod core;

/// Parser: Logos lexer, rowan green tree, typed AST layer
pub mod parser;

/// Syntax: SyntaxFile wrapper with extension handling
pub mod syntax;

/// High-level IR: Salsa-based definition model
pub mod hir;

/// IDE features: hover, goto-definition, find-references, completion
pub mod ide;

/// Project management: workspace loading
pub mod project;

// Re-export commonly needed items
pub use base::{FileId, LineCol, LineIndex, TextRange, TextSize};
pub use hir::{DefinitionIndex, DefinitionSymbol, Diagnostic, SymbolKind};
pub use ide::{Analysis, AnalysisHost};
pub use project::WorkspaceLoader;
pub use syntax::{FileExtension, SyntaxFile};
