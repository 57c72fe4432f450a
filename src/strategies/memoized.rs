//! Top-down recurrence with a per-call cache.
//!
//! Each distinct value is computed once per top-level call, so work is
//! linear in `n`. The recursion still descends through `n-1, n-2, ...`, so
//! depth can reach `n`; the entry point enforces `max_depth` up front instead
//! of letting the stack overflow.

use std::collections::HashMap;

use crate::error::SolveError;
use crate::strategies::Strategy;
use crate::traits::StepCounter;
use crate::utils::ensure_positive;

/// Default recursion ceiling.
pub const DEFAULT_MAX_DEPTH: u64 = 5_000;

#[derive(Debug, Clone, Copy)]
pub struct Memoized {
    max_depth: u64,
}

impl Default for Memoized {
    fn default() -> Self {
        Self::new()
    }
}

impl Memoized {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: u64) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> u64 {
        self.max_depth
    }

    /// Compute the count and hand back the populated cache.
    ///
    /// The cache holds exactly the values visited while solving `n`.
    pub fn min_steps_with_cache(&self, n: u64) -> Result<(u64, HashMap<u64, u64>), SolveError> {
        let n = ensure_positive(n)?;
        if n > self.max_depth {
            return Err(SolveError::RecursionLimit {
                strategy: Strategy::Memoized,
                n,
                limit: self.max_depth,
            });
        }
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("memoized", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut memo = HashMap::new();
        let steps = count(n, &mut memo);

        #[cfg(feature = "tracing")]
        tracing::trace!(cached = memo.len(), steps, "memoized recursion finished");
        Ok((steps, memo))
    }
}

fn count(n: u64, memo: &mut HashMap<u64, u64>) -> u64 {
    if let Some(&steps) = memo.get(&n) {
        return steps;
    }
    if n == 1 {
        memo.insert(1, 0);
        return 0;
    }
    let mut best = 1 + count(n - 1, memo);
    if n % 2 == 0 {
        best = best.min(1 + count(n / 2, memo));
    }
    if n % 3 == 0 {
        best = best.min(1 + count(n / 3, memo));
    }
    memo.insert(n, best);
    best
}

impl StepCounter for Memoized {
    fn strategy(&self) -> Strategy {
        Strategy::Memoized
    }

    fn min_steps(&self, n: u64) -> Result<u64, SolveError> {
        self.min_steps_with_cache(n).map(|(steps, _)| steps)
    }
}
