//! Stack growth for recursive descent.
//!
//! Block and expression parsing, definition hoisting, statement and
//! expression evaluation, and user-level recursion all recurse on the host
//! stack. Wrapping those entry points in
//! [`ensure_sufficient_stack`] moves execution onto a freshly allocated
//! segment whenever the remaining stack drops below [`RED_ZONE`].
//!
//! On `wasm32` the call is a plain passthrough.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
pub const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
