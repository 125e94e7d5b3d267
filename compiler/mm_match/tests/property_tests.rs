//! Property-based tests for list matching and the pattern cache.
//!
//! 1. A list pattern of `k` numeric elements (no rest) matches exactly the
//!    lists of length `>= k` that are all numbers in their first `k` slots.
//! 2. With a rest clause, the rest binding holds every element after the
//!    declared ones.
//! 3. A cached matcher and a freshly compiled one agree on every candidate.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use mm_match::{compile, compile_pattern, parse, Value};
use proptest::prelude::*;

fn element_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1000.0..1000.0f64).prop_map(Value::number),
        "[a-z]{0,4}".prop_map(Value::string),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
    ]
}

/// `a(n, n, ...)` with `k` elements, optionally ending in `|@rest`.
///
/// A group needs an element before `|`, so `k == 0` is always the bare `a`.
fn numeric_pattern(k: usize, rest: bool) -> String {
    if k == 0 {
        return "a".to_string();
    }
    let mut elements = vec!["n"; k].join(", ");
    if rest {
        elements.push_str("|@rest");
    }
    format!("a({elements})")
}

proptest! {
    #[test]
    fn list_lower_bound(k in 0usize..5, items in prop::collection::vec(element_strategy(), 0..8)) {
        let matcher = compile_pattern(&numeric_pattern(k, false)).unwrap();
        let expected = items.len() >= k && items[..k].iter().all(|v| v.as_number().is_some());
        prop_assert_eq!(matcher.is_match(&Value::list(items)), expected);
    }

    #[test]
    fn rest_holds_remaining_elements(
        k in 1usize..4,
        items in prop::collection::vec((-50.0..50.0f64).prop_map(Value::number), 0..8),
    ) {
        let matcher = compile_pattern(&numeric_pattern(k, true)).unwrap();
        let outcome = matcher.test(&Value::list(items.clone()));
        // The `|` clause needs one element of its own.
        if items.len() > k {
            let bindings = outcome.unwrap();
            prop_assert_eq!(bindings.get("rest"), Some(&Value::list(items[k..].to_vec())));
        } else {
            prop_assert!(outcome.is_none());
        }
    }

    #[test]
    fn cached_and_fresh_matchers_agree(
        k in 0usize..4,
        rest in any::<bool>(),
        items in prop::collection::vec(element_strategy(), 0..6),
    ) {
        let pattern = numeric_pattern(k, rest);
        let cached = compile_pattern(&pattern).unwrap();
        let fresh = compile(&parse(&pattern).unwrap()).unwrap();
        let candidate = Value::list(items);
        prop_assert_eq!(cached.test(&candidate), fresh.test(&candidate));
    }
}
