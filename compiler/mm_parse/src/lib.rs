//! mm Parse - recursive descent parser for the mm pattern language.
//!
//! Turns pattern text such as `a(n@x, o(.name:s)|@rest)` into a
//! [`PatternNode`] tree. Parsing is pure and deterministic: the same text
//! always yields an equal tree.
//!
//! # Grammar
//!
//! ```text
//! expr       := list | map | leaf | quoted
//! list       := 'a' ( '@' ident | '(' expr (',' expr)* rest? ')' binding? )?
//! rest       := '|' binding?
//! map        := 'o' ( '@' ident | '(' entry (',' entry)* ')' binding? )?
//! entry      := '.' member (':' expr)? binding?
//! leaf       := ('n' | 's' | 'b' | 'f' | '_') ( '(' literal ')' )? binding?
//! quoted     := ( '"' text '"' | '\'' text '\'' ) binding?
//! binding    := '@' ident
//! ```
//!
//! Spaces and tabs are accepted only around `,`, `|` and group delimiters,
//! and after the whole expression.

mod cursor;
mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind};

use mm_ir::PatternNode;

/// Parse a complete pattern.
///
/// Exactly one expression must be present; anything other than trailing
/// whitespace after it is an error.
pub fn parse(source: &str) -> Result<PatternNode, ParseError> {
    grammar::parse_source(source)
}
