//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Tokens follow TeX's lexical categories; nodes follow the document
//! structure (content units, commands, parameter groups, environments).

/// All syntax kinds (tokens and nodes) in LaTeX source
///
/// Tokens are leaf nodes (command names, delimiters, text).
/// Nodes are composite (content units, commands, environments, groups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    COMMENT,            // % to end of line

    // =========================================================================
    // KEYWORDS (environment delimiters - lexed apart from ordinary commands)
    // =========================================================================
    BEGIN_KW,           // \begin
    END_KW,             // \end

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    STAR,               // *
    DOLLAR,             // $

    // =========================================================================
    // TEXT TOKENS
    // =========================================================================
    COMMAND_NAME,       // \section, \@internal, \%, \\
    WORD,               // run of plain text

    // =========================================================================
    // NODES
    // =========================================================================
    // Document structure
    ROOT,
    CONTENT,            // one unit of document content
    TEXT,               // run of words inside a content unit

    // Commands and parameters
    COMMAND,
    REQUIRED_PARAM,     // { ... } attached to a command
    OPTIONAL_PARAM,     // [ ... ] attached to a command
    GROUP,              // freestanding { ... }

    // Environments
    ENVIRONMENT,        // \begin{x} ... \end{x}
    BEGIN_COMMAND,      // \begin plus its parameters
    END_COMMAND,        // \end plus its parameter

    // Math
    MATH_SHELL,         // $ ... $

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Check if this is an environment delimiter keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::BEGIN_KW as u16) && (self as u16) <= (Self::END_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::DOLLAR as u16)
    }

    /// Check if this token can open a parameter group
    pub fn is_param_open(self) -> bool {
        matches!(self, Self::L_BRACE | Self::L_BRACKET)
    }

    /// Check if this token starts a command of any flavor
    pub fn is_command_token(self) -> bool {
        matches!(self, Self::COMMAND_NAME | Self::BEGIN_KW | Self::END_KW)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LatexLanguage {}

impl rowan::Language for LatexLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<LatexLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<LatexLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<LatexLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<LatexLanguage>;
