//! Runtime values that patterns are matched against.
//!
//! # Arc Enforcement
//!
//! Heap-backed variants hold a [`Heap<T>`], whose constructor is private to
//! this module. All heap values are built through the factory methods on
//! `Value`:
//!
//! ```text
//! let s = Value::string("hello");
//! let xs = Value::list(vec![Value::number(1.0)]);
//! let m = Value::map_from([("x", Value::number(1.0))]);
//! ```
//!
//! Cloning a value is a reference-count bump. Values are `Send + Sync`, so a
//! candidate can be matched from any thread.

mod function;
mod heap;

use std::collections::HashMap;
use std::fmt;

use mm_ir::{ensure_sufficient_stack, Literal};

pub use function::{FunctionValue, NativeFn};
pub use heap::Heap;

/// Members of a map value, keyed by member name.
pub type MapValue = HashMap<String, Value>;

/// A dynamically typed candidate value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absent value; matched only by `_`.
    Null,
    /// Number (double precision), matched by `n`.
    Number(f64),
    /// Boolean, matched by `b`.
    Bool(bool),
    /// Text, matched by `s`.
    Str(Heap<String>),
    /// Ordered list, matched by `a`.
    List(Heap<Vec<Value>>),
    /// Keyed map, matched by `o`.
    Map(Heap<MapValue>),
    /// Callable, matched by `f`.
    Function(FunctionValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn map(members: MapValue) -> Self {
        Value::Map(Heap::new(members))
    }

    /// Build a map from `(name, value)` pairs.
    pub fn map_from<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::map(members.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Wrap a native closure as a callable value.
    pub fn function<F>(name: &str, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(FunctionValue::new(name, func))
    }
}

// Accessors

impl Value {
    /// Name of the runtime type, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Own member `name` of a map value.
    pub fn member(&self, name: &str) -> Option<&Value> {
        self.as_map().and_then(|members| members.get(name))
    }

    /// Strict equality against a pattern literal.
    ///
    /// Only numbers, booleans and text can equal a literal. Numbers compare as
    /// `f64`, so `NaN` equals nothing and `0` equals `-0`.
    pub fn equals_literal(&self, literal: &Literal) -> bool {
        match (self, literal) {
            (Value::Number(n), Literal::Number(_)) => Some(*n) == literal.as_number(),
            (Value::Bool(a), Literal::Bool(b)) => a == b,
            (Value::Str(a), Literal::Text(b)) => a.as_str() == &**b,
            _ => false,
        }
    }
}

/// Drops nested lists and maps from a worklist so candidate depth does not
/// reach the native stack. Shared contents are left to their other owners.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut value) = pending.pop() {
            detach_children(&mut value, &mut pending);
        }
    }
}

fn detach_children(value: &mut Value, pending: &mut Vec<Value>) {
    match value {
        Value::List(items) => {
            if let Some(items) = Heap::get_mut(items) {
                pending.append(items);
            }
        }
        Value::Map(members) => {
            if let Some(members) = Heap::get_mut(members) {
                pending.extend(members.drain().map(|(_, member)| member));
            }
        }
        _ => {}
    }
}

/// Structural equality.
///
/// Lists and maps compare element-wise, functions by identity, numbers as
/// `f64` (`NaN != NaN`).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            match self {
                Value::Null => f.write_str("null"),
                Value::Number(n) => write!(f, "{n}"),
                Value::Bool(b) => write!(f, "{b}"),
                Value::Str(s) => write!(f, "{:?}", s.as_str()),
                Value::List(items) => {
                    f.write_str("[")?;
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{item}")?;
                    }
                    f.write_str("]")
                }
                Value::Map(members) => {
                    // Sorted for stable output.
                    let mut keys: Vec<&String> = members.keys().collect();
                    keys.sort();
                    f.write_str("{")?;
                    for (i, key) in keys.into_iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{key}: {}", members[key])?;
                    }
                    f.write_str("}")
                }
                Value::Function(func) => write!(f, "<fn {}>", func.name()),
            }
        })
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}
