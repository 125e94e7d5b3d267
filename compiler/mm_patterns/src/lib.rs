//! Runtime side of the mm pattern language.
//!
//! - [`Value`]: the dynamically typed candidates patterns are matched against
//! - [`compile`]: lowers a `PatternNode` into a [`Matcher`] closure tree
//! - [`BindingContext`]: names bound by a successful match
//! - [`MatchOutcome`]: the result of one matcher application
//!
//! Compiling is separate from parsing so that a tree built by hand (or
//! deserialized) can be matched without going through pattern text.

mod bindings;
mod compile;
mod error;
mod outcome;
mod structural;
mod value;

pub use bindings::BindingContext;
pub use compile::{compile, Matcher};
pub use error::{CompileError, Placement};
pub use outcome::{Capture, MatchOutcome};
pub use value::{FunctionValue, Heap, MapValue, NativeFn, Value};
