//! Stack growth for recursive descent over patterns and candidates.
//!
//! Parsing, lowering and matching all recurse once per nesting level. A
//! pattern such as `a(a(a(...)))` or a deeply nested candidate would
//! otherwise be bounded by the native thread stack.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: no-op passthrough.

/// If less than this remains, grow the stack (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each growth segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
