//! Errors raised while lowering a pattern tree to matchers.

use std::fmt;

use mm_ir::{NodeTag, Span};

/// A node appeared somewhere it has no meaning.
///
/// The parser never produces such trees. This guards hand-built ASTs: a
/// `Rest` node that is not the last element of a list, a `MapEntry` outside
/// a map, or a map child that is not a `MapEntry`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{node} node is not allowed {placement}")]
pub struct CompileError {
    pub node: NodeTag,
    pub placement: Placement,
    pub span: Span,
}

/// Where in the tree a node is being lowered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    Root,
    ListElement,
    ListTail,
    MapMember,
    MemberValue,
}

impl CompileError {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        "E2001"
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Placement::Root => "at the top level",
            Placement::ListElement => "as a list element",
            Placement::ListTail => "at the end of a list",
            Placement::MapMember => "as a map member",
            Placement::MemberValue => "as a member value",
        })
    }
}
