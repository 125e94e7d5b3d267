//! Shared cache of compiled patterns, keyed by pattern text.

use std::sync::Arc;

use mm_patterns::{compile, Matcher};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::MatchError;

/// Append-only map from pattern text to its compiled matcher.
///
/// Uses a `RwLock` so lookups from many threads proceed in parallel. Entries
/// are never evicted or replaced: once a pattern is compiled, every later
/// lookup of the same text returns the same matcher. Patterns that fail to
/// parse are not cached; the error is reported on every lookup.
#[derive(Default)]
pub struct PatternCache {
    entries: RwLock<FxHashMap<Box<str>, Arc<Matcher>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache with room for `capacity` patterns.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut entries = FxHashMap::default();
        entries.reserve(capacity);
        PatternCache {
            entries: RwLock::new(entries),
        }
    }

    /// Look up `pattern`, compiling and inserting it on a miss.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<Matcher>, MatchError> {
        // Fast path: already compiled
        if let Some(matcher) = self.get(pattern) {
            trace!(pattern, "pattern cache hit");
            return Ok(matcher);
        }

        // Compile without holding the lock.
        let matcher = Arc::new(compile(&mm_parse::parse(pattern)?)?);

        let mut guard = self.entries.write();
        // Double-check after acquiring write lock
        if let Some(existing) = guard.get(pattern) {
            return Ok(Arc::clone(existing));
        }
        debug!(pattern, cached = guard.len() + 1, "compiled pattern");
        guard.insert(pattern.into(), Arc::clone(&matcher));
        Ok(matcher)
    }

    /// The compiled matcher for `pattern`, if it has been compiled.
    pub fn get(&self, pattern: &str) -> Option<Arc<Matcher>> {
        self.entries.read().get(pattern).map(Arc::clone)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.read().contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl std::fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
