//! Hover information implementation.

use std::sync::Arc;

use crate::base::FileId;
use crate::core::commands::builtin_command;
use crate::hir::{DefinitionIndex, DefinitionSymbol};
use crate::ide::cursor;
use crate::syntax::SyntaxFile;

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Name of the hovered command or environment.
    pub name: Arc<str>,
    /// Whether a workspace definition backs this hover.
    pub is_definition: bool,
    /// The defining file, when the hover resolved to a workspace symbol.
    pub definition_file: Option<FileId>,
    /// Start line of the definition, when resolved.
    pub definition_line: Option<u32>,
}

/// Get hover information for a position.
///
/// Workspace definitions win over built-in descriptions; a command that is
/// neither yields no hover.
pub fn hover(
    index: &DefinitionIndex,
    syntax_file: &SyntaxFile,
    line: u32,
    col: u32,
) -> Option<HoverResult> {
    let command = cursor::command_at(syntax_file, line, col)?;

    if let Some(symbol) = index
        .definitions_of(&command)
        .into_iter()
        .find(|symbol| symbol.kind.is_definition())
    {
        return Some(HoverResult {
            contents: build_definition_content(symbol),
            name: Arc::clone(&symbol.name),
            is_definition: true,
            definition_file: Some(symbol.file),
            definition_line: Some(symbol.start_line),
        });
    }

    let builtin = builtin_command(&command)?;
    Some(HoverResult {
        contents: build_builtin_content(builtin.name, builtin.detail),
        name: Arc::from(builtin.name),
        is_definition: false,
        definition_file: None,
        definition_line: None,
    })
}

/// Build markdown hover content for a workspace definition.
fn build_definition_content(symbol: &DefinitionSymbol) -> String {
    let mut content = String::new();

    content.push_str("```latex\n");
    match &symbol.detail {
        Some(detail) => content.push_str(detail),
        None => content.push_str(&symbol.name),
    }
    content.push_str("\n```\n");

    content.push_str("\n---\n\n");
    content.push_str(symbol.kind.display());
    content.push_str(" defined by `");
    content.push_str(&symbol.defined_by);
    content.push_str("`\n");

    content
}

/// Build markdown hover content for a built-in command.
fn build_builtin_content(name: &str, detail: &str) -> String {
    let mut content = String::new();

    content.push_str("```latex\n");
    content.push_str(name);
    content.push_str("\n```\n");

    content.push_str("\n---\n\n");
    content.push_str(detail);
    content.push('\n');

    content
}
