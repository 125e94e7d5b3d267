//! Result of applying one matcher to one candidate.

use crate::value::Value;

/// Outcome of a single matcher application.
///
/// `Rest` is reported only by the matcher compiled from a `|` clause. The
/// enclosing list predicate recognises it by this variant, never by looking
/// at the matcher itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchOutcome<'v> {
    Failed,
    Matched(Capture<'v>),
    Rest,
}

/// What a successful match refers to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Capture<'v> {
    /// The candidate itself.
    Value(&'v Value),
    /// Member `member` of the map `source`.
    ///
    /// Map entries succeed with this so a binding on `.name` captures the
    /// member's value rather than the whole map.
    Member { source: &'v Value, member: &'v str },
}

impl<'v> MatchOutcome<'v> {
    #[inline]
    pub fn is_success(&self) -> bool {
        !matches!(self, MatchOutcome::Failed)
    }

    /// The captured value, if the match succeeded with a capture.
    pub fn captured(&self) -> Option<&'v Value> {
        match self {
            MatchOutcome::Matched(capture) => capture.resolve(),
            MatchOutcome::Failed | MatchOutcome::Rest => None,
        }
    }
}

impl<'v> Capture<'v> {
    /// The value a binding on the matched node receives.
    pub fn resolve(&self) -> Option<&'v Value> {
        match *self {
            Capture::Value(value) => Some(value),
            Capture::Member { source, member } => source.member(member),
        }
    }
}
