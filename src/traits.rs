//! Core trait definitions shared by every solving strategy.
//!
//! Two capabilities are separated:
//! - [`StepCounter`]: compute the minimal number of operations reducing `n`
//!   to `1`. Every strategy implements this.
//! - [`PathSolver`]: additionally produce one optimal [`Operation`] sequence.
//!   Only the iterative engines (bottom-up DP and BFS) implement this; the
//!   recursive oracles answer with a count only.
//!
//! The [`Engine`](crate::engine::Engine) dispatches through these traits, so
//! a custom strategy plugs in by implementing them.

use crate::error::SolveError;
use crate::ops::Operation;
use crate::strategies::Strategy;

/// Minimal step count plus one sequence achieving it.
///
/// Invariant: `steps == operations.len() as u64`. The first operation is
/// applied to `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub steps: u64,
    pub operations: Vec<Operation>,
}

impl Solution {
    /// The trivial solution for `n = 1`.
    pub fn empty() -> Self {
        Self {
            steps: 0,
            operations: Vec::new(),
        }
    }

    pub(crate) fn from_operations(operations: Vec<Operation>) -> Self {
        Self {
            steps: operations.len() as u64,
            operations,
        }
    }
}

/// A strategy able to count the minimal number of operations.
pub trait StepCounter {
    /// Which strategy this is; used for reporting and error messages.
    fn strategy(&self) -> Strategy;

    /// Minimal number of operations reducing `n` to `1`.
    ///
    /// Returns [`SolveError::NonPositive`] for `n == 0` and may return
    /// [`SolveError::RecursionLimit`] for strategies with bounded depth.
    fn min_steps(&self, n: u64) -> Result<u64, SolveError>;
}

/// A strategy that also reconstructs one optimal sequence.
pub trait PathSolver: StepCounter {
    /// Minimal count and one optimal sequence in forward order.
    fn solve(&self, n: u64) -> Result<Solution, SolveError>;
}
