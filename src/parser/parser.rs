//! Recursive descent parser for LaTeX
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::errors::{ErrorCode, RelatedInfo, SyntaxError};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse LaTeX source text into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_root();
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        // Look ahead, skipping trivia
        let mut idx = self.pos;
        let mut count = 0;
        while idx < self.tokens.len() {
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return self.tokens[idx].kind;
                }
                count += 1;
            }
            idx += 1;
        }
        SyntaxKind::ERROR
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(self.end_offset()))
    }

    fn end_offset(&self) -> TextSize {
        self.tokens
            .last()
            .map(|t| t.offset + TextSize::of(t.text))
            .unwrap_or_default()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn bump_any(&mut self) {
        self.bump();
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>, code: ErrorCode) {
        let range = self.current_range();
        self.errors.push(SyntaxError::new(message, range, code));
    }

    fn push_error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    /// Wrap the current token in an ERROR node so the tree stays lossless
    fn bump_into_error(&mut self) {
        self.builder.start_node(SyntaxKind::ERROR.into());
        self.bump_any();
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// Root = Content*
    fn parse_root(&mut self) {
        self.start_node(SyntaxKind::ROOT);
        self.parse_content_list(&[]);
        self.finish_node();
    }

    /// Parse a run of content items until EOF or one of the terminators.
    ///
    /// Trivia between items is bumped at this level, so whitespace and
    /// comments always sit between CONTENT siblings rather than inside them.
    fn parse_content_list(&mut self, terminators: &[SyntaxKind]) {
        while !self.at_eof() {
            let pos_before = self.pos;
            self.skip_trivia();
            if self.at_eof() || self.at_any(terminators) {
                break;
            }
            self.parse_content();
            // Safety: if we didn't make progress, force-skip a token
            if self.pos == pos_before && !self.at_eof() {
                self.error(
                    format!("parser stuck on token: {:?}", self.current_kind()),
                    ErrorCode::E0999,
                );
                self.bump_any();
            }
        }
    }

    /// Content = Command | Environment | Group | MathShell | Text
    fn parse_content(&mut self) {
        match self.current_kind() {
            SyntaxKind::COMMAND_NAME => {
                self.start_node(SyntaxKind::CONTENT);
                self.parse_command();
                self.finish_node();
            }
            SyntaxKind::BEGIN_KW => {
                self.start_node(SyntaxKind::CONTENT);
                self.parse_environment();
                self.finish_node();
            }
            SyntaxKind::END_KW => {
                // An \end with no open environment at this level
                self.error(r"\end without matching \begin", ErrorCode::E0303);
                self.start_node(SyntaxKind::CONTENT);
                self.parse_end_command();
                self.finish_node();
            }
            SyntaxKind::L_BRACE => {
                self.start_node(SyntaxKind::CONTENT);
                self.parse_group();
                self.finish_node();
            }
            SyntaxKind::DOLLAR => {
                self.start_node(SyntaxKind::CONTENT);
                self.parse_math_shell();
                self.finish_node();
            }
            SyntaxKind::WORD
            | SyntaxKind::STAR
            | SyntaxKind::L_BRACKET
            | SyntaxKind::R_BRACKET => {
                self.start_node(SyntaxKind::CONTENT);
                self.parse_text();
                self.finish_node();
            }
            SyntaxKind::R_BRACE => {
                self.error("unexpected closing brace", ErrorCode::E0202);
                self.bump_into_error();
            }
            SyntaxKind::ERROR => {
                let text = self.current().map(|t| t.text).unwrap_or("");
                self.error(format!("invalid character: {:?}", text), ErrorCode::E0101);
                self.bump_into_error();
            }
            kind => {
                self.error(format!("unexpected token: {:?}", kind), ErrorCode::E0901);
                self.bump_into_error();
            }
        }
    }

    /// Command = COMMAND_NAME STAR? (RequiredParam | OptionalParam)*
    ///
    /// A star or parameter separated from the name only by trivia still
    /// belongs to the command. Trailing trivia is left for the parent so
    /// sibling contents stay separated by whitespace at the outer level.
    fn parse_command(&mut self) {
        self.start_node(SyntaxKind::COMMAND);
        self.bump(); // COMMAND_NAME

        if self.nth(0) == SyntaxKind::STAR {
            self.skip_trivia();
            self.bump(); // STAR
        }

        self.parse_params();
        self.finish_node();
    }

    /// Attach all adjacent `{...}` and `[...]` groups as parameters.
    fn parse_params(&mut self) {
        loop {
            match self.nth(0) {
                SyntaxKind::L_BRACE => {
                    self.skip_trivia();
                    self.parse_required_param();
                }
                SyntaxKind::L_BRACKET => {
                    self.skip_trivia();
                    self.parse_optional_param();
                }
                _ => break,
            }
        }
    }

    /// RequiredParam = '{' Content* '}'
    fn parse_required_param(&mut self) {
        self.start_node(SyntaxKind::REQUIRED_PARAM);
        let open_range = self.current_range();
        self.bump(); // L_BRACE

        self.parse_content_list(&[SyntaxKind::R_BRACE]);

        if !self.eat(SyntaxKind::R_BRACE) {
            self.push_error(
                SyntaxError::new("unclosed group", open_range, ErrorCode::E0201)
                    .with_hint("add a closing '}'"),
            );
        }
        self.finish_node();
    }

    /// OptionalParam = '[' Content* ']'
    fn parse_optional_param(&mut self) {
        self.start_node(SyntaxKind::OPTIONAL_PARAM);
        let open_range = self.current_range();
        self.bump(); // L_BRACKET

        self.parse_content_list(&[SyntaxKind::R_BRACKET]);

        if !self.eat(SyntaxKind::R_BRACKET) {
            self.push_error(
                SyntaxError::new("unclosed optional parameter", open_range, ErrorCode::E0203)
                    .with_hint("add a closing ']'"),
            );
        }
        self.finish_node();
    }

    /// Group = '{' Content* '}'
    fn parse_group(&mut self) {
        self.start_node(SyntaxKind::GROUP);
        let open_range = self.current_range();
        self.bump(); // L_BRACE

        self.parse_content_list(&[SyntaxKind::R_BRACE]);

        if !self.eat(SyntaxKind::R_BRACE) {
            self.push_error(
                SyntaxError::new("unclosed group", open_range, ErrorCode::E0201)
                    .with_hint("add a closing '}'"),
            );
        }
        self.finish_node();
    }

    /// MathShell = '$' Content* '$'
    fn parse_math_shell(&mut self) {
        self.start_node(SyntaxKind::MATH_SHELL);
        let open_range = self.current_range();
        self.bump(); // DOLLAR

        self.parse_content_list(&[SyntaxKind::DOLLAR]);

        if !self.eat(SyntaxKind::DOLLAR) {
            self.push_error(
                SyntaxError::new("unterminated inline math", open_range, ErrorCode::E0204)
                    .with_hint("add a closing '$'"),
            );
        }
        self.finish_node();
    }

    /// Text = a maximal run of word-like tokens with no trivia between them.
    ///
    /// Brackets and stars outside of command position are ordinary text.
    fn parse_text(&mut self) {
        self.start_node(SyntaxKind::TEXT);
        while matches!(
            self.current_kind(),
            SyntaxKind::WORD | SyntaxKind::STAR | SyntaxKind::L_BRACKET | SyntaxKind::R_BRACKET
        ) {
            self.bump();
        }
        self.finish_node();
    }

    /// Environment = BeginCommand Content* EndCommand
    fn parse_environment(&mut self) {
        self.start_node(SyntaxKind::ENVIRONMENT);
        let begin_range = self.current_range();
        let begin_name = self.parse_begin_command();

        self.parse_content_list(&[SyntaxKind::END_KW]);

        if self.at(SyntaxKind::END_KW) {
            let end_range = self.current_range();
            let end_name = self.parse_end_command();
            if let (Some(begin), Some(end)) = (&begin_name, &end_name) {
                if begin != end {
                    self.push_error(
                        SyntaxError::new(
                            format!(
                                "mismatched environment: expected \\end{{{}}}, found \\end{{{}}}",
                                begin, end
                            ),
                            end_range,
                            ErrorCode::E0302,
                        )
                        .with_related(RelatedInfo::new("environment opened here", begin_range)),
                    );
                }
            }
        } else {
            let name = begin_name.as_deref().unwrap_or("?");
            self.push_error(
                SyntaxError::at_offset(
                    format!("unclosed environment '{}'", name),
                    self.end_offset(),
                    ErrorCode::E0301,
                )
                .with_hint(format!("add \\end{{{}}}", name))
                .with_related(RelatedInfo::new("environment opened here", begin_range)),
            );
        }
        self.finish_node();
    }

    /// BeginCommand = BEGIN_KW (RequiredParam | OptionalParam)*
    ///
    /// Returns the environment name from the first required parameter.
    fn parse_begin_command(&mut self) -> Option<String> {
        self.start_node(SyntaxKind::BEGIN_COMMAND);
        self.bump(); // BEGIN_KW
        let name = self.peek_environment_name();
        if name.is_none() {
            self.error("missing environment name", ErrorCode::E0304);
        }
        self.parse_params();
        self.finish_node();
        name
    }

    /// EndCommand = END_KW (RequiredParam | OptionalParam)*
    fn parse_end_command(&mut self) -> Option<String> {
        self.start_node(SyntaxKind::END_COMMAND);
        self.bump(); // END_KW
        let name = self.peek_environment_name();
        if name.is_none() {
            self.error("missing environment name", ErrorCode::E0304);
        }
        self.parse_params();
        self.finish_node();
        name
    }

    /// Look ahead for `{name}` without consuming any tokens.
    ///
    /// Used right after a `\begin` or `\end` keyword so the environment name
    /// is known before its parameter is parsed.
    fn peek_environment_name(&self) -> Option<String> {
        let mut idx = self.pos;
        while idx < self.tokens.len() && self.tokens[idx].kind.is_trivia() {
            idx += 1;
        }
        if self.tokens.get(idx).map(|t| t.kind) != Some(SyntaxKind::L_BRACE) {
            return None;
        }
        idx += 1;

        let mut name = String::new();
        while let Some(token) = self.tokens.get(idx) {
            match token.kind {
                SyntaxKind::R_BRACE => return Some(name.trim().to_string()),
                SyntaxKind::L_BRACE => return None,
                _ => name.push_str(token.text),
            }
            idx += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_count(parse: &Parse) -> usize {
        parse
            .syntax()
            .children()
            .filter(|n| n.kind() == SyntaxKind::CONTENT)
            .count()
    }

    #[test]
    fn test_parse_empty() {
        let parse = parse("");
        assert!(parse.ok());
    }

    #[test]
    fn test_parse_plain_text() {
        let parse = parse("hello world");
        assert!(parse.ok(), "errors: {:?}", parse.errors);

        let root = parse.syntax();
        assert_eq!(root.kind(), SyntaxKind::ROOT);
        assert_eq!(content_count(&parse), 2);
    }

    #[test]
    fn test_parse_simple_command() {
        let parse = parse(r"\alpha");
        assert!(parse.ok(), "errors: {:?}", parse.errors);

        let root = parse.syntax();
        let command = root
            .descendants()
            .find(|n| n.kind() == SyntaxKind::COMMAND)
            .unwrap();
        assert_eq!(command.text().to_string(), r"\alpha");
    }

    #[test]
    fn test_parse_command_with_params() {
        let parse = parse(r"\newcommand{\foo}{bar}");
        assert!(parse.ok(), "errors: {:?}", parse.errors);

        let root = parse.syntax();
        let params: Vec<_> = root
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::REQUIRED_PARAM)
            .collect();
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_starred_command() {
        let parse = parse(r"\section*{Introduction}");
        assert!(parse.ok(), "errors: {:?}", parse.errors);

        let root = parse.syntax();
        let command = root
            .descendants()
            .find(|n| n.kind() == SyntaxKind::COMMAND)
            .unwrap();
        let has_star = command
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == SyntaxKind::STAR);
        assert!(has_star);
    }

    #[test]
    fn test_parse_optional_param() {
        let parse = parse(r"\documentclass[11pt]{article}");
        assert!(parse.ok(), "errors: {:?}", parse.errors);

        let root = parse.syntax();
        assert!(
            root.descendants()
                .any(|n| n.kind() == SyntaxKind::OPTIONAL_PARAM)
        );
        assert!(
            root.descendants()
                .any(|n| n.kind() == SyntaxKind::REQUIRED_PARAM)
        );
    }

    #[test]
    fn test_parse_environment() {
        let parse = parse("\\begin{document}hello\\end{document}");
        assert!(parse.ok(), "errors: {:?}", parse.errors);

        let root = parse.syntax();
        let env = root
            .descendants()
            .find(|n| n.kind() == SyntaxKind::ENVIRONMENT)
            .unwrap();
        assert!(env.children().any(|n| n.kind() == SyntaxKind::BEGIN_COMMAND));
        assert!(env.children().any(|n| n.kind() == SyntaxKind::END_COMMAND));
    }

    #[test]
    fn test_parse_nested_environments() {
        let source = "\\begin{document}\\begin{center}x\\end{center}\\end{document}";
        let parse = parse(source);
        assert!(parse.ok(), "errors: {:?}", parse.errors);

        let root = parse.syntax();
        let envs: Vec<_> = root
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::ENVIRONMENT)
            .collect();
        assert_eq!(envs.len(), 2);
    }

    #[test]
    fn test_parse_group() {
        let parse = parse("{hello}");
        assert!(parse.ok(), "errors: {:?}", parse.errors);
        assert!(
            parse
                .syntax()
                .descendants()
                .any(|n| n.kind() == SyntaxKind::GROUP)
        );
    }

    #[test]
    fn test_parse_inline_math() {
        let parse = parse("$x$");
        assert!(parse.ok(), "errors: {:?}", parse.errors);
        assert!(
            parse
                .syntax()
                .descendants()
                .any(|n| n.kind() == SyntaxKind::MATH_SHELL)
        );
    }

    #[test]
    fn test_parse_let_chain() {
        // Each command is its own content item, so `\let\foo\bar` has three
        let parse = parse(r"\let\foo\bar");
        assert!(parse.ok(), "errors: {:?}", parse.errors);
        assert_eq!(content_count(&parse), 3);
    }

    #[test]
    fn test_parse_is_lossless() {
        let source = "% preamble\n\\documentclass[11pt]{article}\n\n\\begin{document}\nHello $x + y$ \\textbf{world}. % trailing\n\\end{document}\n";
        let parse = parse(source);
        assert!(parse.ok(), "errors: {:?}", parse.errors);
        assert_eq!(parse.syntax().text().to_string(), source);
    }

    #[test]
    fn test_error_tree_is_lossless() {
        let source = "\\begin{document} {unclosed \n";
        let parse = parse(source);
        assert!(!parse.ok());
        assert_eq!(parse.syntax().text().to_string(), source);
    }

    #[test]
    fn test_unclosed_group_error() {
        let parse = parse("{hello");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].code, ErrorCode::E0201);
    }

    #[test]
    fn test_unclosed_environment_error() {
        let parse = parse("\\begin{document}hello");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].code, ErrorCode::E0301);
        assert!(parse.errors[0].has_related());
    }

    #[test]
    fn test_mismatched_environment_error() {
        let parse = parse("\\begin{center}x\\end{document}");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].code, ErrorCode::E0302);
    }

    #[test]
    fn test_stray_end_error() {
        let parse = parse("\\end{document}");
        assert!(parse.errors.iter().any(|e| e.code == ErrorCode::E0303));
    }

    #[test]
    fn test_unterminated_math_error() {
        let parse = parse("$x + y");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].code, ErrorCode::E0204);
    }

    #[test]
    fn test_stray_closing_brace_error() {
        let parse = parse("hello}");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].code, ErrorCode::E0202);
    }

    #[test]
    fn test_comment_between_contents() {
        let parse = parse("\\foo % note\n\\bar");
        assert!(parse.ok(), "errors: {:?}", parse.errors);

        // The comment stays at root level, between the two content items
        let root = parse.syntax();
        let comment = root
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::COMMENT);
        assert!(comment.is_some());
    }
}
