#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use mm_patterns::Value;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_decode_structures() {
    let value = decode(r#"{"xs": [1, 2.5, "a"], "ok": true, "none": null}"#).unwrap();
    assert_eq!(
        value,
        Value::map_from([
            ("xs", Value::list(vec![1.into(), 2.5.into(), "a".into()])),
            ("ok", Value::Bool(true)),
            ("none", Value::Null),
        ])
    );
}

#[test]
fn test_decode_scalars() {
    assert_eq!(decode("42").unwrap(), Value::number(42.0));
    assert_eq!(decode("-0.5").unwrap(), Value::number(-0.5));
    assert_eq!(decode(r#""hi""#).unwrap(), Value::string("hi"));
    assert_eq!(decode("null").unwrap(), Value::Null);
}

#[test]
fn test_decode_rejects_malformed_text() {
    assert!(matches!(decode("{\"a\": "), Err(MatchError::Decode(_))));
    assert!(matches!(decode(""), Err(MatchError::Decode(_))));
}
