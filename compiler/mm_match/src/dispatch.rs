//! First-match dispatch over an ordered sequence of arms.

use std::sync::{Arc, OnceLock};

use mm_patterns::{BindingContext, Matcher, Value};
use tracing::trace;

use crate::{Arm, MatchError, PatternCache};

/// Runs candidates against arms, compiling patterns through a cache.
///
/// `Dispatcher::new()` owns a private cache. `Dispatcher::global()` is the
/// process-wide instance behind [`match_value`](crate::match_value) and the
/// other free functions.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    cache: Arc<PatternCache>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher sharing `cache` with other dispatchers.
    pub fn with_cache(cache: Arc<PatternCache>) -> Self {
        Dispatcher { cache }
    }

    pub fn global() -> &'static Dispatcher {
        static GLOBAL: OnceLock<Dispatcher> = OnceLock::new();
        GLOBAL.get_or_init(Dispatcher::new)
    }

    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    /// Parse and compile `pattern`, or fetch it from the cache.
    pub fn compile(&self, pattern: &str) -> Result<Arc<Matcher>, MatchError> {
        self.cache.get_or_compile(pattern)
    }

    /// Run the handler of the first arm whose pattern matches `candidate`.
    ///
    /// Each attempt gets a fresh binding context; a failed attempt's bindings
    /// are dropped. Patterns are compiled only when their arm is reached, so a
    /// malformed pattern after the matching arm is never reported.
    ///
    /// # Errors
    ///
    /// `MatchError::NonExhaustive` if no arm matched, or a parse error for
    /// the first malformed pattern reached.
    #[tracing::instrument(level = "debug", skip_all, fields(candidate = candidate.type_name()))]
    pub fn dispatch<'h, R, I>(&self, candidate: &Value, arms: I) -> Result<R, MatchError>
    where
        I: IntoIterator<Item = Arm<'h, R>>,
    {
        for (index, arm) in arms.into_iter().enumerate() {
            let matcher = self.compile(arm.pattern())?;
            let mut bindings = BindingContext::new();
            if matcher.apply(candidate, &mut bindings).is_success() {
                trace!(index, pattern = arm.pattern(), bound = bindings.len(), "arm matched");
                return Ok(arm.call(bindings));
            }
            trace!(index, pattern = arm.pattern(), "arm did not match");
        }
        Err(MatchError::NonExhaustive {
            candidate: candidate.clone(),
        })
    }

    /// Decode `text` as JSON and dispatch on the result.
    #[cfg(feature = "json")]
    pub fn dispatch_json<'h, R, I>(&self, text: &str, arms: I) -> Result<R, MatchError>
    where
        I: IntoIterator<Item = Arm<'h, R>>,
    {
        let candidate = crate::json::decode(text)?;
        self.dispatch(&candidate, arms)
    }
}
