//! Completion suggestions implementation.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::core::commands::{BUILT_IN_COMMANDS, BUILT_IN_ENVIRONMENTS};
use crate::core::text_utils::is_command_name_character;
use crate::hir::{DefinitionIndex, SymbolKind};
use crate::ide::cursor;
use crate::syntax::SyntaxFile;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Command,
    Environment,
    Builtin,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Command => 3,     // Function
            CompletionKind::Environment => 7, // Class
            CompletionKind::Builtin => 14,    // Keyword
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

/// Completion context.
#[derive(Debug, PartialEq, Eq)]
enum CompletionContext {
    /// Typing a command name; the prefix includes the backslash.
    CommandName(String),
    /// Typing an environment name inside `\begin{` or `\end{`.
    EnvironmentName(String),
}

/// Get completion suggestions at a position.
///
/// Workspace definitions rank above the built-in tables; a user-defined
/// command shadows a built-in of the same name.
pub fn completions(
    index: &DefinitionIndex,
    syntax_file: &SyntaxFile,
    line: u32,
    col: u32,
) -> Vec<CompletionItem> {
    let Some(text) = cursor::line_text(syntax_file, line) else {
        return Vec::new();
    };
    let position = cursor::char_position(&text, col);
    let prefix: String = text.chars().take(position).collect();

    let Some(context) = determine_context(&prefix) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    match context {
        CompletionContext::CommandName(partial) => {
            for symbol in index.all_symbols() {
                let is_command = matches!(
                    symbol.kind,
                    SymbolKind::CommandDefinition
                        | SymbolKind::CommandRedefinition
                        | SymbolKind::MathOperator
                );
                if is_command && symbol.name.starts_with(&partial) {
                    items.push(
                        CompletionItem::new(Arc::clone(&symbol.name), CompletionKind::Command)
                            .with_detail(symbol.kind.display())
                            .with_priority(10),
                    );
                }
            }
            for builtin in BUILT_IN_COMMANDS {
                if builtin.name.starts_with(&partial) {
                    items.push(
                        CompletionItem::new(builtin.name, CompletionKind::Builtin)
                            .with_detail(builtin.detail)
                            .with_priority(50),
                    );
                }
            }
        }
        CompletionContext::EnvironmentName(partial) => {
            for symbol in index.all_symbols() {
                let is_environment = matches!(
                    symbol.kind,
                    SymbolKind::EnvironmentDefinition | SymbolKind::EnvironmentRedefinition
                );
                if is_environment && symbol.name.starts_with(&partial) {
                    items.push(
                        CompletionItem::new(Arc::clone(&symbol.name), CompletionKind::Environment)
                            .with_detail(symbol.kind.display())
                            .with_priority(10),
                    );
                }
            }
            for name in BUILT_IN_ENVIRONMENTS {
                if name.starts_with(&partial) {
                    items.push(
                        CompletionItem::new(*name, CompletionKind::Environment).with_priority(50),
                    );
                }
            }
        }
    }

    // Sort by priority, then dedup so a workspace definition shadows a
    // built-in with the same label.
    items.sort_by(|a, b| {
        (a.sort_priority, &a.label).cmp(&(b.sort_priority, &b.label))
    });
    let mut seen = FxHashSet::default();
    items.retain(|item| seen.insert(Arc::clone(&item.label)));

    items
}

fn determine_context(prefix: &str) -> Option<CompletionContext> {
    // `\begin{fig` or `\end{fig` with the brace still open
    let begin = prefix.rfind("\\begin{").map(|p| p + "\\begin{".len());
    let end = prefix.rfind("\\end{").map(|p| p + "\\end{".len());
    if let Some(brace) = begin.into_iter().chain(end).max() {
        let after = &prefix[brace..];
        if !after.contains('}') && after.chars().all(|c| c.is_ascii_alphanumeric() || c == '*') {
            return Some(CompletionContext::EnvironmentName(after.to_string()));
        }
    }

    // A backslash followed by name characters running up to the cursor
    let chars: Vec<char> = prefix.chars().collect();
    let mut start = chars.len();
    while start > 0 && is_command_name_character(chars[start - 1]) {
        start -= 1;
    }
    if start > 0 && chars[start - 1] == '\\' {
        let partial: String = chars[start - 1..].iter().collect();
        return Some(CompletionContext::CommandName(partial));
    }

    None
}
