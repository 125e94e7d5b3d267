//! Structural predicates shared by the compiled list, map and member
//! matchers.

use mm_ir::{ensure_sufficient_stack, Name};

use crate::bindings::BindingContext;
use crate::compile::Matcher;
use crate::outcome::{Capture, MatchOutcome};
use crate::value::Value;

/// Match a list candidate against its element matchers.
///
/// Element matchers are applied to the candidate's leading elements in
/// order; extra trailing elements are allowed. The candidate needs at least
/// as many elements as there are matchers, counting a `|` clause. When an
/// element matcher reports `Rest`, the remaining elements (from that one on)
/// are bound to the rest matcher's name and matching stops.
pub(crate) fn match_list<'v>(
    elements: &[Matcher],
    candidate: &'v Value,
    bindings: &mut BindingContext,
) -> MatchOutcome<'v> {
    let Value::List(items) = candidate else {
        return MatchOutcome::Failed;
    };
    if elements.len() > items.len() {
        return MatchOutcome::Failed;
    }

    ensure_sufficient_stack(|| {
        for (index, (matcher, item)) in elements.iter().zip(items.iter()).enumerate() {
            match matcher.apply(item, bindings) {
                MatchOutcome::Failed => return MatchOutcome::Failed,
                MatchOutcome::Rest => {
                    if let Some(name) = matcher.binding() {
                        bindings.bind(name, Value::list(items[index..].to_vec()));
                    }
                    break;
                }
                MatchOutcome::Matched(_) => {}
            }
        }
        MatchOutcome::Matched(Capture::Value(candidate))
    })
}

/// Match a map candidate: every entry matcher must succeed on it.
pub(crate) fn match_map<'v>(
    entries: &[Matcher],
    candidate: &'v Value,
    bindings: &mut BindingContext,
) -> MatchOutcome<'v> {
    if !matches!(candidate, Value::Map(_)) {
        return MatchOutcome::Failed;
    }

    ensure_sufficient_stack(|| {
        for entry in entries {
            if !entry.apply(candidate, bindings).is_success() {
                return MatchOutcome::Failed;
            }
        }
        MatchOutcome::Matched(Capture::Value(candidate))
    })
}

/// Match one map entry: `member` must be an own member of the candidate and,
/// when a sub-matcher is given, its value must satisfy it.
///
/// Success yields a member capture, so a binding on the entry receives the
/// member's value.
pub(crate) fn has_member<'v>(
    member: &Name,
    value_matcher: Option<&Matcher>,
    candidate: &'v Value,
    bindings: &mut BindingContext,
) -> MatchOutcome<'v> {
    let Value::Map(members) = candidate else {
        return MatchOutcome::Failed;
    };
    let Some((key, value)) = members.get_key_value(member.as_str()) else {
        return MatchOutcome::Failed;
    };
    if let Some(matcher) = value_matcher {
        if !matcher.apply(value, bindings).is_success() {
            return MatchOutcome::Failed;
        }
    }
    MatchOutcome::Matched(Capture::Member {
        source: candidate,
        member: key,
    })
}
