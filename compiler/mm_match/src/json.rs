//! JSON candidates.
//!
//! Objects become maps, arrays become lists, every number becomes an `f64`
//! and `null` becomes `Value::Null`.

use mm_patterns::Value;

use crate::MatchError;

/// Decode JSON text into a candidate value.
pub fn decode(text: &str) -> Result<Value, MatchError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_json(json))
}

/// Convert an already-decoded JSON document.
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::string(s),
        serde_json::Value::Array(items) => Value::list(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(members) => Value::map(
            members
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests;
