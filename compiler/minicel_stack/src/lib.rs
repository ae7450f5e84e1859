//! Stack safety for deep formula recursion.
//!
//! The parser recurses once per `+` in a chain and the evaluator recurses
//! once per node and once per cell-to-cell reference, so a long chain such
//! as `=A0+A1+...` or a column where every cell references the one above can
//! exhaust a fixed native stack. Wrap those recursive calls in
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain passthrough.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// ```text
/// fn parse_plus_expr(&mut self) -> Result<ExprId, ParseError> {
///     ensure_sufficient_stack(|| {
///         // ... recursive parsing logic ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
