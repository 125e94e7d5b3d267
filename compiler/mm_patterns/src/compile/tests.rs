#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use mm_ir::{Literal, Name, NodeTag, PatternKind, PatternNode, Span};
use pretty_assertions::assert_eq;

use super::*;

fn matcher(source: &str) -> Matcher {
    compile(&mm_parse::parse(source).unwrap()).unwrap()
}

fn nums(ns: &[i32]) -> Value {
    Value::list(ns.iter().copied().map(Value::from).collect())
}

fn node(kind: PatternKind) -> PatternNode {
    PatternNode::new(kind, Span::DUMMY)
}

#[test]
fn test_leaf_type_tests() {
    let func = Value::function("id", |_| Value::Null);
    let cases: [(&str, Value, bool); 10] = [
        ("n", Value::number(3.5), true),
        ("n", Value::string("3"), false),
        ("s", Value::string(""), true),
        ("s", Value::number(1.0), false),
        ("b", Value::Bool(false), true),
        ("b", Value::number(0.0), false),
        ("f", func.clone(), true),
        ("f", Value::list(vec![func]), false),
        ("_", Value::Null, true),
        ("n", Value::Null, false),
    ];
    for (source, candidate, expected) in cases {
        assert_eq!(matcher(source).is_match(&candidate), expected, "{source} on {candidate}");
    }
}

#[test]
fn test_literals() {
    assert!(matcher("n(42)").is_match(&Value::number(42.0)));
    assert!(!matcher("n(42)").is_match(&Value::string("42")));
    assert!(matcher("b(true)").is_match(&Value::Bool(true)));
    assert!(!matcher("b(true)").is_match(&Value::Bool(false)));
    assert!(matcher("\"foo\"").is_match(&Value::string("foo")));
    assert!(matcher("s(foo)").is_match(&Value::string("foo")));
    assert!(!matcher("'foo'").is_match(&Value::string("bar")));
}

#[test]
fn test_bindings_capture_values() {
    let m = matcher("a(n@x, s@y)");
    let ctx = m.test(&Value::list(vec![1.into(), "a".into()])).unwrap();
    assert_eq!(ctx.get("x"), Some(&Value::number(1.0)));
    assert_eq!(ctx.get("y"), Some(&Value::string("a")));
    assert_eq!(ctx.len(), 2);
}

#[test]
fn test_binding_on_composite_captures_whole_value() {
    let all = nums(&[1, 2]);
    let ctx = matcher("a(n)@all").test(&all).unwrap();
    assert_eq!(ctx.get("all"), Some(&all));
}

#[test]
fn test_rest_captures_remaining_elements() {
    let ctx = matcher("a(n@x|@rest)").test(&nums(&[1, 2, 3, 4])).unwrap();
    assert_eq!(ctx.get("x"), Some(&Value::number(1.0)));
    assert_eq!(ctx.get("rest"), Some(&nums(&[2, 3, 4])));
}

#[test]
fn test_rest_needs_an_element() {
    // The `|` clause counts towards the required length.
    let m = matcher("a(n|@rest)");
    assert!(!m.is_match(&nums(&[1])));
    let ctx = m.test(&nums(&[1, 2])).unwrap();
    assert_eq!(ctx.get("rest"), Some(&nums(&[2])));
}

#[test]
fn test_unbound_rest() {
    let m = matcher("a(s|)");
    assert!(m.is_match(&Value::list(vec!["a".into(), 1.into(), Value::Null])));
    assert!(m.test(&Value::list(vec!["a".into(), 1.into()])).unwrap().is_empty());
}

#[test]
fn test_map_at_least_semantics() {
    let m = matcher("o(.x:n@px, .y)");
    let point = Value::map_from([
        ("x", Value::from(1)),
        ("y", Value::from(2)),
        ("z", Value::from(3)),
    ]);
    let ctx = m.test(&point).unwrap();
    assert_eq!(ctx.get("px"), Some(&Value::number(1.0)));
    assert!(!m.is_match(&Value::map_from([("x", Value::from("1")), ("y", Value::Null)])));
    assert!(!m.is_match(&Value::map_from([("x", Value::from(1))])));
}

#[test]
fn test_member_binding_captures_member_value() {
    let ctx = matcher("o(.name@who)")
        .test(&Value::map_from([("name", Value::string("ada"))]))
        .unwrap();
    assert_eq!(ctx.get("who"), Some(&Value::string("ada")));
}

#[test]
fn test_bare_groups() {
    assert!(matcher("a").is_match(&nums(&[])));
    assert!(matcher("a").is_match(&nums(&[1])));
    assert!(!matcher("a").is_match(&Value::map(crate::value::MapValue::new())));
    assert!(matcher("o").is_match(&Value::map(crate::value::MapValue::new())));
    assert!(!matcher("o").is_match(&nums(&[])));
    assert!(!matcher("o").is_match(&Value::Null));
}

#[test]
fn test_nested_patterns() {
    let m = matcher("a(o(.tag:s(leaf), .value:n@v), a(_, b@flag))");
    let candidate = Value::list(vec![
        Value::map_from([("tag", Value::string("leaf")), ("value", Value::from(7))]),
        Value::list(vec![Value::Null, Value::Bool(true)]),
    ]);
    let ctx = m.test(&candidate).unwrap();
    assert_eq!(ctx.names(), vec!["flag", "v"]);
}

#[test]
fn test_failed_attempt_leaves_partial_bindings_in_shared_context() {
    // `test` hands out a context only on success; `apply` writes eagerly.
    let m = matcher("a(n@x, s)");
    let mut ctx = BindingContext::new();
    assert!(!m.apply(&nums(&[1, 2]), &mut ctx).is_success());
    assert!(ctx.contains("x"));
    assert!(m.test(&nums(&[1, 2])).is_none());
}

#[test]
fn test_matcher_metadata() {
    let m = matcher("a(n|@rest)@all");
    assert_eq!(m.tag(), NodeTag::List);
    assert_eq!(m.binding().map(Name::as_str), Some("all"));
    assert_eq!(matcher("_").binding(), None);
}

#[test]
fn test_rest_outside_list_tail_rejected() {
    let tree = node(PatternKind::List(vec![node(PatternKind::Rest), node(PatternKind::Numeric)]));
    let err = compile(&tree).unwrap_err();
    assert_eq!(err.node, NodeTag::Rest);
    assert_eq!(err.placement, Placement::ListElement);
    assert_eq!(err.to_string(), "rest node is not allowed as a list element");

    let err = compile(&node(PatternKind::Rest)).unwrap_err();
    assert_eq!(err.placement, Placement::Root);
}

#[test]
fn test_map_children_must_be_entries() {
    let tree = node(PatternKind::Map(vec![node(PatternKind::Numeric)]));
    let err = compile(&tree).unwrap_err();
    assert_eq!(err.node, NodeTag::Numeric);
    assert_eq!(err.placement, Placement::MapMember);

    let entry = node(PatternKind::MapEntry {
        member: Name::from("x"),
        pattern: None,
    });
    let err = compile(&node(PatternKind::List(vec![entry]))).unwrap_err();
    assert_eq!(err.node, NodeTag::MapEntry);
    assert_eq!(err.placement, Placement::ListTail);
}

#[test]
fn test_hand_built_tree_with_arbitrary_member_name() {
    let tree = node(PatternKind::Map(vec![node(PatternKind::MapEntry {
        member: Name::from("content-type"),
        pattern: Some(Box::new(node(PatternKind::Equals(Literal::text("json"))))),
    })]));
    let m = compile(&tree).unwrap();
    assert!(m.is_match(&Value::map_from([("content-type", Value::string("json"))])));
}

#[test]
fn test_deeply_nested_pattern() {
    let depth = 100_000;
    let source = format!("{}n@x{}", "a(".repeat(depth), ")".repeat(depth));
    let tree = mm_parse::parse(&source).unwrap();
    let m = compile(&tree).unwrap();
    drop(tree);

    let mut candidate = Value::number(9.0);
    for _ in 0..depth {
        candidate = Value::list(vec![candidate]);
    }
    let ctx = m.test(&candidate).unwrap();
    assert_eq!(ctx.get("x"), Some(&Value::number(9.0)));
    assert!(!m.is_match(&Value::list(vec![Value::number(9.0)])));
    drop(m);
    drop(candidate);
}

#[test]
fn test_deep_map_pattern_compiles_and_drops() {
    let depth = 100_000;
    let source = format!("{}_{}", "o(.v:".repeat(depth), ")".repeat(depth));
    let m = matcher(&source);
    let mut candidate = Value::Null;
    for _ in 0..depth {
        candidate = Value::map_from([("v", candidate)]);
    }
    assert!(m.is_match(&candidate));
    let rendered = candidate.to_string();
    assert!(rendered.starts_with("{v: {v: "));
    drop(m);
    drop(candidate);
}

#[test]
fn test_matcher_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Matcher>();
    assert_send_sync::<Value>();
}
