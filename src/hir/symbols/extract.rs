//! Definition and include extraction from the syntax tree.

use std::sync::Arc;

use tracing::debug;

use crate::base::FileId;
use crate::core::commands;
use crate::parser::{AstNode, Command, TextRange};
use crate::syntax::SyntaxFile;

use super::context::ExtractionContext;
use super::types::{DefinitionSymbol, ExtractionResult, IncludeRef, SymbolKind, new_element_id};

/// Extract all definitions, sections, and include references from a file.
pub fn extract_definitions(file: FileId, syntax: &SyntaxFile) -> ExtractionResult {
    let mut result = ExtractionResult::default();
    let ctx = ExtractionContext::new(file, syntax);

    if let Some(source_file) = syntax.source_file() {
        for command in source_file.commands() {
            extract_from_command(&mut result, &ctx, &command);
        }
    }

    debug!(
        "extracted {} symbols and {} includes from {}",
        result.symbols.len(),
        result.includes.len(),
        file
    );
    result
}

fn extract_from_command(result: &mut ExtractionResult, ctx: &ExtractionContext, command: &Command) {
    let Some(name) = command.name() else { return };

    if commands::is_definition_or_redefinition(&name) {
        if let Some(symbol) = extract_definition(ctx, command, &name) {
            result.symbols.push(symbol);
        }
    } else if let Some(level) = commands::sectioning_level(&name) {
        result.symbols.push(extract_section(ctx, command, &name, level));
    } else if commands::is_include_command(&name) {
        extract_includes(result, ctx, command, &name);
    }
}

fn extract_definition(
    ctx: &ExtractionContext,
    command: &Command,
    defined_by: &str,
) -> Option<DefinitionSymbol> {
    let kind = match defined_by {
        "\\newcommand" | "\\let" | "\\def" => SymbolKind::CommandDefinition,
        "\\renewcommand" => SymbolKind::CommandRedefinition,
        "\\DeclareMathOperator" => SymbolKind::MathOperator,
        "\\newenvironment" => SymbolKind::EnvironmentDefinition,
        "\\renewenvironment" => SymbolKind::EnvironmentRedefinition,
        _ => return None,
    };

    let (name, name_range) = match kind {
        SymbolKind::EnvironmentDefinition | SymbolKind::EnvironmentRedefinition => {
            let param = command.required_params().next()?;
            (param.text().trim().to_string(), param.syntax().text_range())
        }
        _ => defined_command(command)?,
    };
    if name.is_empty() {
        return None;
    }

    let range = command.syntax().text_range();
    let span = ctx.span_info(range);
    let name_span = ctx.span_info(name_range);

    Some(DefinitionSymbol {
        name: Arc::from(name.as_str()),
        defined_by: Arc::from(defined_by),
        element_id: new_element_id(),
        kind,
        file: ctx.file,
        start_line: span.start_line,
        start_col: span.start_col,
        end_line: span.end_line,
        end_col: span.end_col,
        name_start_line: name_span.start_line,
        name_start_col: name_span.start_col,
        name_end_line: name_span.end_line,
        name_end_col: name_span.end_col,
        section_level: None,
        detail: ctx.line_preview(range.start()),
    })
}

/// The command name a definition introduces, with the range it occupies.
///
/// `\newcommand{\foo}{...}` carries the name in its first parameter while
/// `\let\foo\bar` places it in the content that follows.
fn defined_command(command: &Command) -> Option<(String, TextRange)> {
    match command.required_params().next() {
        Some(param) => {
            if let Some(inner) = param.command() {
                let name = inner.name()?;
                return Some((name.to_string(), inner.syntax().text_range()));
            }
            let text = param.text();
            let trimmed = text.trim();
            if trimmed.starts_with('\\') {
                Some((trimmed.to_string(), param.syntax().text_range()))
            } else {
                None
            }
        }
        None => {
            let target = command.definition_command()?;
            let name = target.name()?;
            Some((name.to_string(), target.syntax().text_range()))
        }
    }
}

fn extract_section(
    ctx: &ExtractionContext,
    command: &Command,
    defined_by: &str,
    level: u8,
) -> DefinitionSymbol {
    let range = command.syntax().text_range();
    let title_param = command.required_params().next();
    let title = title_param
        .as_ref()
        .map(|p| p.text().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "(untitled)".to_string());
    let name_range = title_param
        .map(|p| p.syntax().text_range())
        .unwrap_or(range);

    let span = ctx.span_info(range);
    let name_span = ctx.span_info(name_range);

    DefinitionSymbol {
        name: Arc::from(title.as_str()),
        defined_by: Arc::from(defined_by),
        element_id: new_element_id(),
        kind: SymbolKind::Section,
        file: ctx.file,
        start_line: span.start_line,
        start_col: span.start_col,
        end_line: span.end_line,
        end_col: span.end_col,
        name_start_line: name_span.start_line,
        name_start_col: name_span.start_col,
        name_end_line: name_span.end_line,
        name_end_col: name_span.end_col,
        section_level: Some(level),
        detail: ctx.line_preview(range.start()),
    }
}

fn extract_includes(
    result: &mut ExtractionResult,
    ctx: &ExtractionContext,
    command: &Command,
    including: &str,
) {
    let Some(param) = command.required_params().next() else {
        return;
    };
    let span = ctx.span_info(param.syntax().text_range());
    // \usepackage{amsmath,amssymb} names several targets in one parameter
    for target in param.text().split(',') {
        let target = target.trim();
        if target.is_empty() {
            continue;
        }
        result.includes.push(IncludeRef {
            target: Arc::from(target),
            command: Arc::from(including),
            file: ctx.file,
            start_line: span.start_line,
            start_col: span.start_col,
            end_line: span.end_line,
            end_col: span.end_col,
        });
    }
}
