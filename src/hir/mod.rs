//! High-level IR (HIR) — definition model with Salsa queries.
//!
//! This module contains the incremental computation engine using Salsa.
//! Parsing and definition extraction are expressed as queries that are
//! automatically memoized and invalidated when inputs change.
//!
//! ## Key Types
//!
//! - [`RootDatabase`] — Concrete implementation of the Salsa database
//! - [`DefinitionSymbol`] — A definition extracted from the syntax tree
//! - [`DefinitionIndex`] — Workspace-wide definition index for name lookup
//! - [`Diagnostic`] — Positioned errors and warnings
//!
//! ## Query Layers
//!
//! ```text
//! file_text(file)             ← INPUT: raw source text
//!     │
//!     ▼
//! parse_file(file)            ← Lossless syntax tree (per-file)
//!     │
//!     ▼
//! file_definitions(file)      ← Extract definitions and includes (per-file)
//!     │
//!     ▼
//! DefinitionIndex             ← Workspace-wide name lookup
//!     │
//!     ▼
//! diagnostics                 ← Parse errors and duplicate checks
//! ```

mod db;
mod diagnostics;
mod index;
mod symbols;

pub use db::{
    FileText, ParseResult, RootDatabase, file_definitions, file_definitions_from_text, parse_file,
};
pub use diagnostics::{
    Diagnostic, DiagnosticCollector, RelatedLocation, codes, duplicate_definitions,
    syntax_diagnostics,
};
pub use index::{DefinitionIndex, SymbolIdx};
pub use symbols::{
    DefinitionSymbol, ExtractionResult, IncludeRef, SymbolKind, extract_definitions,
    new_element_id,
};
