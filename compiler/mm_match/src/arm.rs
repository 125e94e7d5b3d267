//! One `(pattern, handler)` pair of a dispatch.

use std::borrow::Cow;
use std::fmt;

use mm_patterns::BindingContext;

type Handler<'h, R> = Box<dyn FnOnce(BindingContext) -> R + 'h>;

/// A pattern and the handler to run when it is the first to match.
///
/// Arms are tried in the order they are given. The handler receives the
/// bindings of its own successful attempt and nothing else.
pub struct Arm<'h, R> {
    pattern: Cow<'h, str>,
    handler: Handler<'h, R>,
}

impl<'h, R> Arm<'h, R> {
    pub fn new<F>(pattern: impl Into<Cow<'h, str>>, handler: F) -> Self
    where
        F: FnOnce(BindingContext) -> R + 'h,
    {
        Arm {
            pattern: pattern.into(),
            handler: Box::new(handler),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn call(self, bindings: BindingContext) -> R {
        (self.handler)(bindings)
    }
}

impl<R> fmt::Debug for Arm<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arm")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}
