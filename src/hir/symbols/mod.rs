//! Definition extraction from the syntax tree — pure functions that return symbols.
//!
//! Extraction works directly with the typed AST wrappers from
//! `crate::parser` (e.g. [`Command`](crate::parser::Command)), producing
//! [`DefinitionSymbol`] values without any intermediate representation.
//!
//! # Module structure
//!
//! - `types` — symbol and include types shared across the crate
//! - `context` — span mapping state threaded through extraction
//! - `extract` — extraction entry point and per-command dispatch

mod context;
mod extract;
mod types;


pub use types::{DefinitionSymbol, ExtractionResult, IncludeRef, SymbolKind};

pub use types::new_element_id;

pub use extract::extract_definitions;
