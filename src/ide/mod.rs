//! IDE features — High-level APIs for LSP handlers.
//!
//! This module provides the interface between the definition index and an
//! LSP server. Each function corresponds to an LSP request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at LSP boundary
//! 3. **Composable**: Built on top of the syntax tree and definition index
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use texter::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content("main.tex", "\\newcommand{\\vect}[1]{\\mathbf{#1}}");
//!
//! let analysis = host.analysis();
//! let symbols = analysis.document_symbols(file_id);
//! ```

mod analysis;
mod completion;
mod cursor;
mod document_links;
mod folding;
mod goto;
mod hover;
mod references;
mod symbols;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use document_links::{DocumentLink, document_links};
pub use folding::{FoldingRange, folding_ranges};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use references::{Reference, ReferenceResult, find_references};
pub use symbols::{SymbolInfo, document_symbols, workspace_symbols};
