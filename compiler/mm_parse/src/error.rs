//! Parse error types.
//!
//! A `ParseError` pairs a structured `ParseErrorKind` with the span of the
//! offending input. The byte offset where parsing stopped is `position()`.

use std::fmt;

use mm_ir::Span;

/// Malformed pattern text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}", offset = .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("cannot parse empty pattern")]
    EmptyPattern,
    #[error("expected binding name after `@`")]
    MissingBindingName,
    #[error("expected member name after `.`")]
    MissingMemberName,
    #[error("expected `.` to start a map member, found {}", describe_found(.found))]
    ExpectedMember { found: Option<char> },
    #[error("expected a pattern, found {}", describe_found(.found))]
    UnexpectedToken { found: Option<char> },
    #[error("expected `{expected}`, found {}", describe_found(.found))]
    Unclosed {
        expected: char,
        found: Option<char>,
    },
    #[error("`{descriptor}` does not take a literal")]
    LiteralNotAllowed { descriptor: char },
    #[error("literal body is empty")]
    EmptyLiteral,
    #[error("invalid numeric literal `{text}`")]
    InvalidNumber { text: String },
    #[error("boolean literal must be `true` or `false`, found `{text}`")]
    InvalidBoolean { text: String },
    #[error("expected end of pattern, found `{found}`")]
    TrailingInput { found: char },
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Byte offset where the error was detected.
    #[inline]
    pub fn position(&self) -> u32 {
        self.span.start
    }

    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl ParseErrorKind {
    /// Stable diagnostic code (`E1xxx`).
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::EmptyPattern => "E1001",
            ParseErrorKind::UnexpectedToken { .. } => "E1002",
            ParseErrorKind::Unclosed { .. } => "E1003",
            ParseErrorKind::MissingBindingName => "E1004",
            ParseErrorKind::MissingMemberName => "E1005",
            ParseErrorKind::ExpectedMember { .. } => "E1006",
            ParseErrorKind::LiteralNotAllowed { .. } => "E1007",
            ParseErrorKind::EmptyLiteral => "E1008",
            ParseErrorKind::InvalidNumber { .. } => "E1009",
            ParseErrorKind::InvalidBoolean { .. } => "E1010",
            ParseErrorKind::TrailingInput { .. } => "E1011",
        }
    }
}

/// Formats the character found at an error site.
struct Found(Option<char>);

fn describe_found(c: &Option<char>) -> Found {
    Found(*c)
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "`{}`", c.escape_default()),
            None => f.write_str("end of pattern"),
        }
    }
}
