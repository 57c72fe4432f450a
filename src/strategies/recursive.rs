//! Direct recursion over the recurrence
//! `f(1) = 0`, `f(n) = 1 + min(f(n-1), f(n/2) if 2|n, f(n/3) if 3|n)`.
//!
//! Exponential time. Only meant as a reference for small `n`, so the entry
//! point refuses anything above `max_n`.

use crate::error::SolveError;
use crate::ops::Operation;
use crate::strategies::Strategy;
use crate::traits::StepCounter;
use crate::utils::ensure_positive;

/// Largest `n` accepted by default.
pub const DEFAULT_MAX_N: u64 = 20;

#[derive(Debug, Clone, Copy)]
pub struct Recursive {
    max_n: u64,
}

impl Default for Recursive {
    fn default() -> Self {
        Self::new()
    }
}

impl Recursive {
    pub fn new() -> Self {
        Self::with_max_n(DEFAULT_MAX_N)
    }

    pub fn with_max_n(max_n: u64) -> Self {
        Self { max_n }
    }

    pub fn max_n(&self) -> u64 {
        self.max_n
    }
}

fn count(n: u64) -> u64 {
    if n == 1 {
        return 0;
    }
    Operation::ALL
        .iter()
        .filter_map(|op| op.apply(n))
        .map(|next| 1 + count(next))
        .min()
        .unwrap_or(0)
}

impl StepCounter for Recursive {
    fn strategy(&self) -> Strategy {
        Strategy::Recursive
    }

    fn min_steps(&self, n: u64) -> Result<u64, SolveError> {
        let n = ensure_positive(n)?;
        if n > self.max_n {
            return Err(SolveError::RecursionLimit {
                strategy: Strategy::Recursive,
                n,
                limit: self.max_n,
            });
        }
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("recursive", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        Ok(count(n))
    }
}
