//! First-match dispatch for the mm pattern language.
//!
//! Patterns are short strings: `a(n@x|@rest)` matches a list whose first
//! element is a number, binding it to `x` and the remaining elements to
//! `rest`. A dispatch tries `(pattern, handler)` arms in order and runs the
//! handler of the first pattern that matches.
//!
//! ```text
//! let label = match_value(&candidate, [
//!     Arm::new("a(n@x|@rest)", |b| format!("head {}", b.get("x")...)),
//!     Arm::new("o(.name:s@who)", |b| ...),
//!     Arm::new("_", |_| "other".to_string()),
//! ])?;
//! ```
//!
//! Compiled patterns are cached by text, so a pattern is parsed once no matter
//! how many dispatches mention it.
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=mm_match=debug` (cache misses, dispatches) or
//! `RUST_LOG=mm_match=trace,mm_patterns=trace` (every arm and binding).

mod arm;
mod cache;
mod dispatch;
mod error;
#[cfg(feature = "json")]
pub mod json;

use std::sync::{Arc, Once};

pub use arm::Arm;
pub use cache::PatternCache;
pub use dispatch::Dispatcher;
pub use error::MatchError;
pub use mm_parse::{parse, ParseError, ParseErrorKind};
pub use mm_patterns::{
    compile, BindingContext, Capture, CompileError, FunctionValue, MapValue, MatchOutcome, Matcher,
    Value,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, and
/// leaves an already installed global subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .try_init();
        if let Err(err) = installed {
            tracing::debug!(%err, "keeping existing tracing subscriber");
        }
    });
}

/// Dispatch `candidate` through the global dispatcher.
pub fn match_value<'h, R, I>(candidate: &Value, arms: I) -> Result<R, MatchError>
where
    I: IntoIterator<Item = Arm<'h, R>>,
{
    Dispatcher::global().dispatch(candidate, arms)
}

/// Compile `pattern` through the global cache.
///
/// The matcher is shared: compiling the same text again returns the same
/// `Arc`. Use [`Matcher::test`] to match and collect bindings.
pub fn compile_pattern(pattern: &str) -> Result<Arc<Matcher>, MatchError> {
    Dispatcher::global().compile(pattern)
}

/// Decode `text` as JSON and dispatch it through the global dispatcher.
#[cfg(feature = "json")]
pub fn match_json<'h, R, I>(text: &str, arms: I) -> Result<R, MatchError>
where
    I: IntoIterator<Item = Arm<'h, R>>,
{
    Dispatcher::global().dispatch_json(text, arms)
}
