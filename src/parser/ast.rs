//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for LaTeX syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.
//!
//! [`Command`] carries the classification and navigation surface: membership
//! checks against the static tables in [`crate::core::commands`], sibling
//! navigation over content units, and parameter access.

use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxElement, SyntaxNode, SyntaxToken};
use crate::core::commands;

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, ROOT);

impl SourceFile {
    /// Top-level content units in document order
    pub fn contents(&self) -> impl Iterator<Item = Content> + '_ {
        self.0.children().filter_map(Content::cast)
    }

    /// All commands in the document, in document order
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.0.descendants().filter_map(Command::cast)
    }

    /// All environments in the document, in document order
    pub fn environments(&self) -> impl Iterator<Item = Environment> + '_ {
        self.0.descendants().filter_map(Environment::cast)
    }
}

// ============================================================================
// Content
// ============================================================================

ast_node!(Content, CONTENT);

impl Content {
    /// The first command in this content unit's subtree, if any
    pub fn command(&self) -> Option<Command> {
        self.0.descendants().find_map(Command::cast)
    }
}

// ============================================================================
// Command
// ============================================================================

ast_node!(Command, COMMAND);

impl Command {
    /// The command name token, including the leading backslash
    pub fn name_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::COMMAND_NAME)
    }

    /// The command name, e.g. `\newcommand`
    pub fn name(&self) -> Option<SmolStr> {
        self.name_token().map(|t| SmolStr::new(t.text()))
    }

    /// Whether this command is an original definition (`\newcommand`, `\let`,
    /// `\def`, `\DeclareMathOperator`, `\newenvironment`). Redefinitions do
    /// not count.
    pub fn is_definition(&self) -> bool {
        self.name()
            .map(|n| commands::is_definition(&n))
            .unwrap_or(false)
    }

    /// Whether this command is a definition or a redefinition
    pub fn is_definition_or_redefinition(&self) -> bool {
        self.name()
            .map(|n| commands::is_definition_or_redefinition(&n))
            .unwrap_or(false)
    }

    /// Whether this command defines another command
    pub fn is_command_definition(&self) -> bool {
        self.name()
            .map(|n| commands::is_command_definition(&n))
            .unwrap_or(false)
    }

    /// Whether this command defines an environment
    pub fn is_environment_definition(&self) -> bool {
        self.name()
            .map(|n| commands::is_environment_definition(&n))
            .unwrap_or(false)
    }

    /// Whether the command carries a `*` modifier
    pub fn has_star(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == SyntaxKind::STAR)
    }

    /// The next command in document order.
    ///
    /// Steps from this command's content unit to the next sibling, skipping
    /// whitespace tokens only. Absent when the next sibling is not a content
    /// unit (a comment, for example) or contains no command.
    pub fn next_command(&self) -> Option<Command> {
        let content = self.0.ancestors().find_map(Content::cast)?;
        let next = next_non_whitespace_sibling(content.syntax())?;
        Content::cast(next.into_node()?)?.command()
    }

    /// The previous command in document order, symmetric to
    /// [`Command::next_command`].
    pub fn previous_command(&self) -> Option<Command> {
        let content = self.0.ancestors().find_map(Content::cast)?;
        let previous = previous_non_whitespace_sibling(content.syntax())?;
        Content::cast(previous.into_node()?)?.command()
    }

    /// The command being defined by a `\let` or `\def` style definition.
    ///
    /// In `\let\foo\bar` the defined command `\foo` is the next command
    /// after the defining keyword.
    pub fn definition_command(&self) -> Option<Command> {
        self.next_command()
    }

    /// The name of the command defined by this definition.
    ///
    /// `\DeclareMathOperator` and `\newcommand` name the defined command in
    /// their first required parameter; the other definers are followed by the
    /// defined command directly.
    pub fn defined_command_name(&self) -> Option<SmolStr> {
        let name = self.name()?;
        if commands::defines_in_first_parameter(&name) {
            let param = self.required_params().next()?;
            if let Some(defined) = param.command() {
                return defined.name();
            }
            // The parameter may carry the name as bare text
            let text = param.text();
            let text = text.trim();
            if text.starts_with('\\') {
                return Some(SmolStr::new(text));
            }
            None
        } else {
            self.definition_command()?.name()
        }
    }

    /// Required `{...}` parameters in order
    pub fn required_params(&self) -> impl Iterator<Item = RequiredParam> + '_ {
        self.0.children().filter_map(RequiredParam::cast)
    }

    /// Optional `[...]` parameters in order
    pub fn optional_params(&self) -> impl Iterator<Item = OptionalParam> + '_ {
        self.0.children().filter_map(OptionalParam::cast)
    }

    /// The 0-based `index`th required parameter's text, without braces.
    ///
    /// Absent when the command has no required parameters or the index is out
    /// of bounds.
    pub fn required_parameter(&self, index: usize) -> Option<String> {
        self.required_params().nth(index).map(|p| p.text())
    }

    /// The file name referenced by an include-style command.
    ///
    /// Absent unless the command name is in the include set and a required
    /// parameter is present. Returns the name verbatim as written, with no
    /// path resolution or extension inference.
    pub fn included_file_name(&self) -> Option<String> {
        let name = self.name()?;
        if !commands::is_include_command(&name) {
            return None;
        }
        self.required_params().next().map(|p| p.text())
    }

    /// The leading whitespace of the line this command starts on
    pub fn find_indentation(&self) -> String {
        let root = match self.0.ancestors().last() {
            Some(root) => root,
            None => return String::new(),
        };
        let text = root.text().to_string();
        let offset: usize = self.0.text_range().start().into();
        let line_start = text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
        text[line_start..]
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect()
    }
}

/// Step to the next sibling element, skipping whitespace tokens only
fn next_non_whitespace_sibling(node: &SyntaxNode) -> Option<SyntaxElement> {
    let mut current = node.next_sibling_or_token();
    while let Some(element) = &current {
        let is_whitespace = element
            .as_token()
            .map(|t| t.kind() == SyntaxKind::WHITESPACE)
            .unwrap_or(false);
        if !is_whitespace {
            break;
        }
        current = element.next_sibling_or_token();
    }
    current
}

/// Step to the previous sibling element, skipping whitespace tokens only
fn previous_non_whitespace_sibling(node: &SyntaxNode) -> Option<SyntaxElement> {
    let mut current = node.prev_sibling_or_token();
    while let Some(element) = &current {
        let is_whitespace = element
            .as_token()
            .map(|t| t.kind() == SyntaxKind::WHITESPACE)
            .unwrap_or(false);
        if !is_whitespace {
            break;
        }
        current = element.prev_sibling_or_token();
    }
    current
}

// ============================================================================
// Parameters
// ============================================================================

ast_node!(RequiredParam, REQUIRED_PARAM);

impl RequiredParam {
    /// The parameter text with the surrounding braces stripped
    pub fn text(&self) -> String {
        let raw = self.0.text().to_string();
        let inner = raw.strip_prefix('{').unwrap_or(&raw);
        let inner = inner.strip_suffix('}').unwrap_or(inner);
        inner.to_string()
    }

    /// The first command inside this parameter, if any
    pub fn command(&self) -> Option<Command> {
        self.0.descendants().find_map(Command::cast)
    }

    /// Content units inside this parameter
    pub fn contents(&self) -> impl Iterator<Item = Content> + '_ {
        self.0.children().filter_map(Content::cast)
    }
}

ast_node!(OptionalParam, OPTIONAL_PARAM);

impl OptionalParam {
    /// The parameter text with the surrounding brackets stripped
    pub fn text(&self) -> String {
        let raw = self.0.text().to_string();
        let inner = raw.strip_prefix('[').unwrap_or(&raw);
        let inner = inner.strip_suffix(']').unwrap_or(inner);
        inner.to_string()
    }
}

// ============================================================================
// Environment
// ============================================================================

ast_node!(Environment, ENVIRONMENT);

impl Environment {
    pub fn begin(&self) -> Option<BeginCommand> {
        self.0.children().find_map(BeginCommand::cast)
    }

    pub fn end(&self) -> Option<EndCommand> {
        self.0.children().find_map(EndCommand::cast)
    }

    /// The environment name, from the `\begin` parameter
    pub fn name(&self) -> Option<SmolStr> {
        self.begin()?.name()
    }

    /// Content units between `\begin` and `\end`
    pub fn contents(&self) -> impl Iterator<Item = Content> + '_ {
        self.0.children().filter_map(Content::cast)
    }
}

ast_node!(BeginCommand, BEGIN_COMMAND);

impl BeginCommand {
    /// The environment name from the first required parameter
    pub fn name(&self) -> Option<SmolStr> {
        self.0
            .children()
            .find_map(RequiredParam::cast)
            .map(|p| SmolStr::new(p.text().trim()))
    }

    pub fn required_params(&self) -> impl Iterator<Item = RequiredParam> + '_ {
        self.0.children().filter_map(RequiredParam::cast)
    }

    pub fn optional_params(&self) -> impl Iterator<Item = OptionalParam> + '_ {
        self.0.children().filter_map(OptionalParam::cast)
    }
}

ast_node!(EndCommand, END_COMMAND);

impl EndCommand {
    /// The environment name from the first required parameter
    pub fn name(&self) -> Option<SmolStr> {
        self.0
            .children()
            .find_map(RequiredParam::cast)
            .map(|p| SmolStr::new(p.text().trim()))
    }
}

// ============================================================================
// Group, math, text
// ============================================================================

ast_node!(Group, GROUP);

impl Group {
    pub fn contents(&self) -> impl Iterator<Item = Content> + '_ {
        self.0.children().filter_map(Content::cast)
    }
}

ast_node!(MathShell, MATH_SHELL);

impl MathShell {
    pub fn contents(&self) -> impl Iterator<Item = Content> + '_ {
        self.0.children().filter_map(Content::cast)
    }
}

ast_node!(Text, TEXT);

impl Text {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}
