//! mm IR - syntax tree types for the mm pattern language.
//!
//! This crate contains the data shared by every stage of the matcher:
//! - Spans for locations inside a pattern source
//! - Names for bindings and map members
//! - The pattern AST (`PatternNode`, `PatternKind`, `Literal`)
//! - Stack growth for the recursive stages
//!
//! The AST is pure data. It is produced by `mm_parse`, lowered by
//! `mm_patterns`, and never mutated after construction.
//!
//! Types that contain floats store them as u64 bits so they stay `Eq` and
//! `Hash`.

mod name;
mod pattern;
mod span;
mod stack;

pub use name::Name;
pub use pattern::{Literal, NodeTag, PatternKind, PatternNode};
pub use span::Span;
pub use stack::ensure_sufficient_stack;

