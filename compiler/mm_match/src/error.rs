//! Errors surfaced by the dispatcher.

use mm_parse::ParseError;
use mm_patterns::{CompileError, Value};

/// Failure of a dispatch or of a cache-aware compile.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// An arm's pattern text is malformed.
    #[error("invalid pattern: {0}")]
    Parse(#[from] ParseError),

    /// A pattern tree could not be lowered.
    #[error("invalid pattern tree: {0}")]
    Compile(#[from] CompileError),

    /// No arm matched the candidate. Add `_` as a final arm to catch all.
    #[error("non-exhaustive patterns: no arm matched `{candidate}`")]
    NonExhaustive { candidate: Value },

    /// JSON candidate text could not be decoded.
    #[cfg(feature = "json")]
    #[error("invalid JSON candidate: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MatchError {
    /// Stable diagnostic code, when the error has one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            MatchError::Parse(err) => Some(err.code()),
            MatchError::Compile(err) => Some(err.code()),
            MatchError::NonExhaustive { .. } => Some("E3001"),
            #[cfg(feature = "json")]
            MatchError::Decode(_) => None,
        }
    }
}
