//! Pattern syntax tree.
//!
//! One `PatternNode` per pattern expression. Composite kinds own their
//! children directly; the tree is small (bounded by the pattern text) and
//! immutable once built, so there is no arena.

use std::fmt;

use crate::{ensure_sufficient_stack, Name, Span};

/// A node of the pattern tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternNode {
    pub kind: PatternKind,
    /// Name declared with `@` on this node, if any.
    pub binding: Option<Name>,
    pub span: Span,
}

/// The closed set of pattern node kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternKind {
    /// `a`, `a(...)`: a list whose leading elements match `elements`.
    ///
    /// A trailing `Rest` node stands for the `|` clause.
    List(Vec<PatternNode>),
    /// `o`, `o(...)`: a map with at least the listed members.
    ///
    /// Every child is a `MapEntry`.
    Map(Vec<PatternNode>),
    /// `.member` or `.member:pattern` inside a map group.
    MapEntry {
        member: Name,
        pattern: Option<Box<PatternNode>>,
    },
    /// `n`
    Numeric,
    /// `s`
    Textual,
    /// `b`
    Boolean,
    /// `f`
    Callable,
    /// `_`
    Any,
    /// `n(42)`, `s(foo)`, `b(true)`, `"foo"`
    Equals(Literal),
    /// `|` at the end of a list group.
    Rest,
}

/// Literal operand of an `Equals` node.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// Number, stored as `f64::to_bits`.
    Number(u64),
    Bool(bool),
    Text(Box<str>),
}

/// Fieldless mirror of `PatternKind`, for diagnostics and introspection.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeTag {
    List,
    Map,
    MapEntry,
    Numeric,
    Textual,
    Boolean,
    Callable,
    Any,
    Equals,
    Rest,
}

impl NodeTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeTag::List => "list",
            NodeTag::Map => "map",
            NodeTag::MapEntry => "map entry",
            NodeTag::Numeric => "numeric",
            NodeTag::Textual => "textual",
            NodeTag::Boolean => "boolean",
            NodeTag::Callable => "callable",
            NodeTag::Any => "any",
            NodeTag::Equals => "equals",
            NodeTag::Rest => "rest",
        }
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Literal {
    #[inline]
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }

    #[inline]
    pub fn text(value: impl Into<Box<str>>) -> Self {
        Literal::Text(value.into())
    }

    /// The numeric value, if this is a number literal.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(bits) => write!(f, "Number({})", f64::from_bits(*bits)),
            Literal::Bool(b) => write!(f, "Bool({b})"),
            Literal::Text(s) => write!(f, "Text({s:?})"),
        }
    }
}

/// Renders the literal in pattern syntax.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(bits) => write!(f, "n({})", f64::from_bits(*bits)),
            Literal::Bool(b) => write!(f, "b({b})"),
            Literal::Text(s) if !s.is_empty() && !s.contains(')') => write!(f, "s({s})"),
            Literal::Text(s) if !s.contains('"') => write!(f, "\"{s}\""),
            Literal::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl PatternNode {
    /// Create an unbound node.
    #[inline]
    pub fn new(kind: PatternKind, span: Span) -> Self {
        PatternNode {
            kind,
            binding: None,
            span,
        }
    }

    /// Attach a binding name.
    #[must_use]
    pub fn bound(mut self, name: impl Into<Name>) -> Self {
        self.binding = Some(name.into());
        self
    }

    pub fn tag(&self) -> NodeTag {
        self.kind.tag()
    }

    /// Child nodes in source order. Empty for leaf kinds.
    pub fn children(&self) -> &[PatternNode] {
        match &self.kind {
            PatternKind::List(children) | PatternKind::Map(children) => children,
            PatternKind::MapEntry {
                pattern: Some(pattern),
                ..
            } => std::slice::from_ref(pattern),
            _ => &[],
        }
    }

    /// Walk this node and all descendants in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a PatternNode)) {
        ensure_sufficient_stack(|| {
            visit(self);
            for child in self.children() {
                child.walk(visit);
            }
        });
    }

    /// Every binding name declared in this subtree, in source order.
    pub fn binding_names(&self) -> Vec<&Name> {
        let mut names = Vec::new();
        self.walk(&mut |node| {
            if let Some(name) = &node.binding {
                names.push(name);
            }
        });
        names
    }
}

impl PatternKind {
    pub fn tag(&self) -> NodeTag {
        match self {
            PatternKind::List(_) => NodeTag::List,
            PatternKind::Map(_) => NodeTag::Map,
            PatternKind::MapEntry { .. } => NodeTag::MapEntry,
            PatternKind::Numeric => NodeTag::Numeric,
            PatternKind::Textual => NodeTag::Textual,
            PatternKind::Boolean => NodeTag::Boolean,
            PatternKind::Callable => NodeTag::Callable,
            PatternKind::Any => NodeTag::Any,
            PatternKind::Equals(_) => NodeTag::Equals,
            PatternKind::Rest => NodeTag::Rest,
        }
    }
}

/// Drops nested groups from a worklist so tree depth does not reach the
/// native stack.
impl Drop for PatternNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(&mut self.kind, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node.kind, &mut pending);
        }
    }
}

fn detach_children(kind: &mut PatternKind, pending: &mut Vec<PatternNode>) {
    match kind {
        PatternKind::List(children) | PatternKind::Map(children) => pending.append(children),
        PatternKind::MapEntry { pattern, .. } => {
            if let Some(pattern) = pattern.take() {
                pending.push(*pattern);
            }
        }
        _ => {}
    }
}

/// Renders the node back into canonical pattern syntax.
///
/// Whitespace is normalized to a single space after each separator. Parsing
/// the output yields a tree equal to this one up to spans.
impl fmt::Display for PatternNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            match &self.kind {
                PatternKind::List(elements) => {
                    f.write_str("a")?;
                    // A bare `a@x` has no group; `a(...)@x` binds after the group.
                    if !elements.is_empty() {
                        f.write_str("(")?;
                        let mut first = true;
                        for element in elements {
                            if let PatternKind::Rest = element.kind {
                                f.write_str("|")?;
                                if let Some(name) = &element.binding {
                                    write!(f, "@{name}")?;
                                }
                                continue;
                            }
                            if !first {
                                f.write_str(", ")?;
                            }
                            first = false;
                            write!(f, "{element}")?;
                        }
                        f.write_str(")")?;
                    }
                }
                PatternKind::Map(entries) => {
                    f.write_str("o")?;
                    if !entries.is_empty() {
                        f.write_str("(")?;
                        for (i, entry) in entries.iter().enumerate() {
                            if i > 0 {
                                f.write_str(", ")?;
                            }
                            write!(f, "{entry}")?;
                        }
                        f.write_str(")")?;
                    }
                }
                PatternKind::MapEntry { member, pattern } => {
                    write!(f, ".{member}")?;
                    if let Some(pattern) = pattern {
                        write!(f, ":{pattern}")?;
                    }
                }
                PatternKind::Numeric => f.write_str("n")?,
                PatternKind::Textual => f.write_str("s")?,
                PatternKind::Boolean => f.write_str("b")?,
                PatternKind::Callable => f.write_str("f")?,
                PatternKind::Any => f.write_str("_")?,
                PatternKind::Equals(literal) => write!(f, "{literal}")?,
                PatternKind::Rest => f.write_str("|")?,
            }
            if let Some(name) = &self.binding {
                write!(f, "@{name}")?;
            }
            Ok(())
        })
    }
}
