//! Callable values.

use std::fmt;
use std::sync::Arc;

use super::Value;

/// Native closure behind a callable value.
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable candidate, matched by `f`.
///
/// Equality is identity: two function values are equal only if they wrap the
/// same closure allocation.
#[derive(Clone)]
pub struct FunctionValue {
    name: Arc<str>,
    func: Arc<NativeFn>,
}

impl FunctionValue {
    pub fn new<F>(name: &str, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        FunctionValue {
            name: Arc::from(name),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name)
    }
}
