//! Recursion support for the parser and the evaluator.
//!
//! Both walk their input by direct recursion, so two things are needed:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so a deep
//!   but finite Church-numeral computation does not overflow the thread stack.
//! - [`DepthLimit`] puts a ceiling on nesting, so a program that never stops
//!   recursing fails with an error instead of consuming memory until the
//!   process dies.

/// Grow the stack when less than this much remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Nesting counter with an optional ceiling.
///
/// `enter` before descending, `exit` after returning. `None` means no
/// ceiling: only available memory bounds the recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthLimit {
    depth: usize,
    max: Option<usize>,
}

/// Returned by [`DepthLimit::enter`] when the ceiling would be crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    pub limit: usize,
}

impl DepthLimit {
    pub fn new(max: Option<usize>) -> Self {
        DepthLimit { depth: 0, max }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Record one more level of nesting.
    ///
    /// The depth is left unchanged on failure.
    #[inline]
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if let Some(limit) = self.max {
            if self.depth >= limit {
                return Err(DepthExceeded { limit });
            }
        }
        self.depth += 1;
        Ok(())
    }

    #[inline]
    pub fn exit(&mut self) {
        debug_assert!(self.depth > 0, "DepthLimit::exit without matching enter");
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        Self::unlimited()
    }
}
