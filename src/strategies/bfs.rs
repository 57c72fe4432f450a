//! Shortest path over the implicit graph of positive integers.
//!
//! Nodes are integers; edges are the guarded operations. A FIFO frontier of
//! `(value, path so far)` pairs is expanded in level order from `n`, so the
//! first time `1` is dequeued its path is minimal. A visited set ensures each
//! value is enqueued at most once.

use std::collections::{HashSet, VecDeque};

use crate::error::SolveError;
use crate::ops::Operation;
use crate::strategies::Strategy;
use crate::traits::{PathSolver, Solution, StepCounter};
use crate::utils::ensure_positive;

#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Self
    }
}

/// Outgoing edges of `value`, in relaxation order.
fn neighbours(value: u64) -> impl Iterator<Item = (u64, Operation)> {
    Operation::ALL.into_iter().filter_map(move |op| {
        if op == Operation::Decrement && value <= 1 {
            return None;
        }
        op.apply(value).map(|next| (next, op))
    })
}

impl StepCounter for Bfs {
    fn strategy(&self) -> Strategy {
        Strategy::Bfs
    }

    fn min_steps(&self, n: u64) -> Result<u64, SolveError> {
        self.solve(n).map(|s| s.steps)
    }
}

impl PathSolver for Bfs {
    fn solve(&self, n: u64) -> Result<Solution, SolveError> {
        if ensure_positive(n)? == 1 {
            return Ok(Solution::empty());
        }

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("bfs", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier: VecDeque<(u64, Vec<Operation>)> = VecDeque::new();
        let mut visited: HashSet<u64> = HashSet::new();
        frontier.push_back((n, Vec::new()));
        visited.insert(n);

        while let Some((value, path)) = frontier.pop_front() {
            if value == 1 {
                #[cfg(feature = "tracing")]
                tracing::trace!(visited = visited.len(), steps = path.len(), "reached 1");
                return Ok(Solution::from_operations(path));
            }
            for (next, op) in neighbours(value) {
                if visited.insert(next) {
                    let mut extended = Vec::with_capacity(path.len() + 1);
                    extended.extend_from_slice(&path);
                    extended.push(op);
                    frontier.push_back((next, extended));
                }
            }
        }

        Err(SolveError::NoPath(n))
    }
}
