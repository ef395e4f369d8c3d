//! Stack growth for the recursive binder.
//!
//! The binder recurses once per nested pattern node. Nesting is bounded by
//! the size of the declaration, not by the data, but generated declarations
//! can still nest deeply enough to exhaust a thread's default stack.
//!
//! Wrap each recursive step with [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn bind_node(&mut self, pattern: &BindingPattern, value: Value) -> Result<(), EvalError> {
//!     ensure_sufficient_stack(|| self.bind_node_inner(pattern, value))
//! }
//! ```
//!
//! On native targets the `stacker` crate allocates a fresh segment when less
//! than [`RED_ZONE`] bytes remain. On `wasm32` the closure runs directly.

/// Remaining stack below which a new segment is allocated (64KB).
pub const RED_ZONE: usize = 64 * 1024;

/// Size of each freshly allocated stack segment (1MB).
pub const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
