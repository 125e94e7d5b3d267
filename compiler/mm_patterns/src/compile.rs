//! Lowering of pattern trees to matcher closures.
//!
//! Each node becomes one `Matcher`: a boxed closure plus the node's tag and
//! binding name. Composite nodes capture their children's matchers, so a
//! compiled pattern is a tree of closures with the same shape as the AST.
//! A node with a binding is wrapped so that, on success, the captured value
//! is written to the binding context.
//!
//! `Rest` nodes are the exception: their matcher only reports
//! `MatchOutcome::Rest`, and the enclosing list binds the tail itself.

use std::fmt;

use mm_ir::{ensure_sufficient_stack, Name, NodeTag, PatternKind, PatternNode};
use smallvec::SmallVec;
use tracing::trace;

use crate::bindings::BindingContext;
use crate::error::{CompileError, Placement};
use crate::outcome::{Capture, MatchOutcome};
use crate::structural;
use crate::value::Value;

/// Signature of a compiled predicate.
type MatchFn = dyn for<'v> Fn(&'v Value, &mut BindingContext) -> MatchOutcome<'v> + Send + Sync;

/// Children of a composite node. Most groups are short.
type Children = SmallVec<[Matcher; 4]>;

/// A compiled pattern node.
///
/// Matchers are immutable and `Send + Sync`; one compiled pattern can be
/// applied from many threads at once.
pub struct Matcher {
    tag: NodeTag,
    binding: Option<Name>,
    run: Box<MatchFn>,
}

impl Matcher {
    /// Apply this matcher, writing bindings into `bindings`.
    #[inline]
    pub fn apply<'v>(&self, candidate: &'v Value, bindings: &mut BindingContext) -> MatchOutcome<'v> {
        (self.run)(candidate, bindings)
    }

    /// Apply this matcher with a fresh context.
    ///
    /// Returns the bindings on success.
    pub fn test(&self, candidate: &Value) -> Option<BindingContext> {
        let mut bindings = BindingContext::new();
        self.apply(candidate, &mut bindings)
            .is_success()
            .then_some(bindings)
    }

    pub fn is_match(&self, candidate: &Value) -> bool {
        self.apply(candidate, &mut BindingContext::new()).is_success()
    }

    /// Kind of the node this matcher was compiled from.
    pub fn tag(&self) -> NodeTag {
        self.tag
    }

    /// Binding name declared on the node, if any.
    pub fn binding(&self) -> Option<&Name> {
        self.binding.as_ref()
    }
}

/// Child matchers live inside the boxed closure, so dropping a deep matcher
/// recurses once per nesting level.
impl Drop for Matcher {
    fn drop(&mut self) {
        let run = std::mem::replace(&mut self.run, predicate(|_, _| MatchOutcome::Failed));
        ensure_sufficient_stack(move || drop(run));
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("tag", &self.tag)
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

/// Compile a pattern tree into a matcher.
///
/// # Errors
///
/// Returns a `CompileError` if a node appears where it has no meaning.
/// Trees produced by `mm_parse::parse` always compile.
pub fn compile(node: &PatternNode) -> Result<Matcher, CompileError> {
    trace!(pattern = %node, "compile");
    lower(node, Placement::Root)
}

fn lower(node: &PatternNode, placement: Placement) -> Result<Matcher, CompileError> {
    ensure_sufficient_stack(|| {
        let is_entry = matches!(node.kind, PatternKind::MapEntry { .. });
        let is_rest = matches!(node.kind, PatternKind::Rest);
        if is_entry != (placement == Placement::MapMember)
            || (is_rest && placement != Placement::ListTail)
        {
            return Err(CompileError {
                node: node.tag(),
                placement,
                span: node.span,
            });
        }

        let run = match &node.kind {
            PatternKind::List(elements) => {
                let last = elements.len().saturating_sub(1);
                let children = elements
                    .iter()
                    .enumerate()
                    .map(|(i, element)| {
                        let placement = if i == last {
                            Placement::ListTail
                        } else {
                            Placement::ListElement
                        };
                        lower(element, placement)
                    })
                    .collect::<Result<Children, _>>()?;
                predicate(move |candidate, bindings| {
                    structural::match_list(&children, candidate, bindings)
                })
            }
            PatternKind::Map(entries) => {
                let children = entries
                    .iter()
                    .map(|entry| lower(entry, Placement::MapMember))
                    .collect::<Result<Children, _>>()?;
                predicate(move |candidate, bindings| {
                    structural::match_map(&children, candidate, bindings)
                })
            }
            PatternKind::MapEntry { member, pattern } => {
                let member = member.clone();
                let value_matcher = pattern
                    .as_deref()
                    .map(|pattern| lower(pattern, Placement::MemberValue))
                    .transpose()?;
                predicate(move |candidate, bindings| {
                    structural::has_member(&member, value_matcher.as_ref(), candidate, bindings)
                })
            }
            PatternKind::Rest => {
                // The enclosing list binds the tail.
                return Ok(Matcher {
                    tag: NodeTag::Rest,
                    binding: node.binding.clone(),
                    run: predicate(|_, _| MatchOutcome::Rest),
                });
            }
            PatternKind::Numeric => type_test(|v| matches!(v, Value::Number(_))),
            PatternKind::Textual => type_test(|v| matches!(v, Value::Str(_))),
            PatternKind::Boolean => type_test(|v| matches!(v, Value::Bool(_))),
            PatternKind::Callable => type_test(|v| matches!(v, Value::Function(_))),
            PatternKind::Any => {
                predicate(|candidate, _| MatchOutcome::Matched(Capture::Value(candidate)))
            }
            PatternKind::Equals(literal) => {
                let literal = literal.clone();
                type_test(move |v| v.equals_literal(&literal))
            }
        };

        let run = match &node.binding {
            Some(name) => bind(name.clone(), run),
            None => run,
        };
        Ok(Matcher {
            tag: node.tag(),
            binding: node.binding.clone(),
            run,
        })
    })
}

/// Box a closure as a predicate, fixing its higher-ranked signature.
fn predicate<F>(f: F) -> Box<MatchFn>
where
    F: for<'v> Fn(&'v Value, &mut BindingContext) -> MatchOutcome<'v> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Leaf predicate that captures the candidate when `test` holds.
fn type_test<T>(test: T) -> Box<MatchFn>
where
    T: Fn(&Value) -> bool + Send + Sync + 'static,
{
    predicate(move |candidate, _| {
        if test(candidate) {
            MatchOutcome::Matched(Capture::Value(candidate))
        } else {
            MatchOutcome::Failed
        }
    })
}

/// Wrap `inner` so its captured value is bound to `name` on success.
fn bind(name: Name, inner: Box<MatchFn>) -> Box<MatchFn> {
    predicate(move |candidate, bindings| {
        let outcome = inner(candidate, &mut *bindings);
        if let Some(value) = outcome.captured() {
            bindings.bind(&name, value.clone());
        }
        outcome
    })
}

#[cfg(test)]
mod tests;
