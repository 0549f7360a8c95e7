//! Logos-based lexer for LaTeX source
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"")] // Don't skip anything, we want all tokens
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"%[^\r\n]*")]
    Comment,

    // =========================================================================
    // ENVIRONMENT DELIMITERS (must win over the command-name regex)
    // =========================================================================
    #[token(r"\begin", priority = 10)]
    BeginKw,

    #[token(r"\end", priority = 10)]
    EndKw,

    // =========================================================================
    // COMMANDS
    // =========================================================================
    // Control word: backslash plus letters, `@` included for internal names
    #[regex(r"\\[a-zA-Z@]+")]
    CommandName,

    // Control symbol: backslash plus exactly one non-letter character
    #[regex(r"\\[^a-zA-Z@]")]
    ControlSymbol,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("*")]
    Star,

    #[token("$")]
    Dollar,

    // =========================================================================
    // TEXT
    // =========================================================================
    // Everything that is not special to the grammar above
    #[regex(r"[^\\{}\[\]%$* \t\r\n]+")]
    Word,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            Comment => SyntaxKind::COMMENT,

            BeginKw => SyntaxKind::BEGIN_KW,
            EndKw => SyntaxKind::END_KW,

            // Control words and control symbols are one token class to the tree
            CommandName => SyntaxKind::COMMAND_NAME,
            ControlSymbol => SyntaxKind::COMMAND_NAME,

            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Star => SyntaxKind::STAR,
            Dollar => SyntaxKind::DOLLAR,

            Word => SyntaxKind::WORD,
        }
    }
}
