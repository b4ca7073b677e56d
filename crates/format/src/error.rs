//! Parse errors for the puzzle and solution text formats

/// A parse failure with the 1-based line it happened on
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("expected {expected} tokens, found {found}")]
    TokenCount { expected: usize, found: usize },

    #[error("invalid integer {token:?}")]
    InvalidInteger { token: String },

    #[error("invalid color {token:?}")]
    InvalidColor { token: String },

    #[error(transparent)]
    Core(#[from] dropblox_core::Error),
}
