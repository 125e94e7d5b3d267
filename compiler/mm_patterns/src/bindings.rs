//! Name-to-value bindings collected during one match attempt.

use std::collections::HashMap;

use mm_ir::Name;
use rustc_hash::FxHashMap;

use crate::value::Value;

/// Bindings written by the matchers of one pattern during one attempt.
///
/// A name bound twice keeps the last value written. Bindings from a failed
/// attempt are discarded by the caller, so a successful context holds only
/// the names of the pattern that matched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BindingContext {
    values: FxHashMap<Name, Value>,
}

impl BindingContext {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `name`, replacing any earlier value.
    pub fn bind(&mut self, name: &Name, value: Value) {
        tracing::trace!(name = name.as_str(), %value, "bind");
        self.values.insert(name.clone(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.values.iter()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(Name::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn into_map(self) -> HashMap<String, Value> {
        self.values
            .into_iter()
            .map(|(name, value)| (name.as_str().to_owned(), value))
            .collect()
    }
}
