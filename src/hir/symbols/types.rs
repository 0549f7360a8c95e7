//! Symbol types produced by definition extraction.

use std::sync::Arc;

use crate::base::FileId;

/// Generate a fresh globally unique identifier for a symbol.
pub fn new_element_id() -> Arc<str> {
    uuid::Uuid::new_v4().to_string().into()
}

/// The kind of thing a [`DefinitionSymbol`] introduces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// `\newcommand`, `\let`, `\def`
    CommandDefinition,
    /// `\renewcommand`
    CommandRedefinition,
    /// `\DeclareMathOperator`
    MathOperator,
    /// `\newenvironment`
    EnvironmentDefinition,
    /// `\renewenvironment`
    EnvironmentRedefinition,
    /// `\part` through `\subparagraph`, kept for document outlines
    Section,
}

impl SymbolKind {
    /// Whether the symbol introduces or replaces a usable name.
    ///
    /// Sections carry a title, not a name other code can reference.
    pub fn is_definition(&self) -> bool {
        !matches!(self, SymbolKind::Section)
    }

    /// Human-readable kind name for UI display.
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::CommandDefinition => "command",
            SymbolKind::CommandRedefinition => "command (redefined)",
            SymbolKind::MathOperator => "math operator",
            SymbolKind::EnvironmentDefinition => "environment",
            SymbolKind::EnvironmentRedefinition => "environment (redefined)",
            SymbolKind::Section => "section",
        }
    }
}

/// A definition extracted from a parsed file.
///
/// Spans are 0-indexed line/column pairs so consumers never need the
/// original text to position a result. The name span points at just the
/// defined name, the full span at the whole defining command.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DefinitionSymbol {
    /// The introduced name. Commands keep their leading backslash
    /// (`\foo`), environment and section names are bare.
    pub name: Arc<str>,
    /// The defining command, e.g. `\newcommand`.
    pub defined_by: Arc<str>,
    /// Globally unique id, stable for the lifetime of this symbol.
    pub element_id: Arc<str>,
    pub kind: SymbolKind,
    /// The file containing the definition.
    pub file: FileId,
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    pub name_start_line: u32,
    pub name_start_col: u32,
    pub name_end_line: u32,
    pub name_end_col: u32,
    /// Outline depth for sections (`\part` = 0 .. `\subparagraph` = 6).
    pub section_level: Option<u8>,
    /// Trimmed source line of the definition, shown on hover.
    pub detail: Option<Arc<str>>,
}

/// A file reference discovered in a parsed file (`\input`, `\usepackage`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IncludeRef {
    /// The referenced path or package name, verbatim from the source.
    pub target: Arc<str>,
    /// The including command, e.g. `\input`.
    pub command: Arc<str>,
    /// The file containing the reference.
    pub file: FileId,
    /// Span of the parameter naming the target.
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

/// Everything extraction produces for one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub symbols: Vec<DefinitionSymbol>,
    pub includes: Vec<IncludeRef>,
}

/// Line/column span used while building symbols.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct SpanInfo {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}
