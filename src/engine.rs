//! Strategy dispatch.
//!
//! [`Engine`] selects one of the four strategies by [`Strategy`] tag, applies
//! the configured recursion bounds, and packages the outcome as a
//! [`Report`]. It performs no I/O.
//!
//! ```
//! use countdown_dp::{Engine, Strategy};
//!
//! let engine = Engine::new(Strategy::Bfs);
//! let report = engine.run(10, true).unwrap();
//! assert_eq!(report.steps, 3);
//! assert_eq!(report.path_tokens().as_deref(), Some("-1 /3 /3"));
//! ```

use crate::error::{SolveError, ValidationError};
use crate::ops::Operation;
use crate::strategies::{Bfs, BottomUp, Memoized, Recursive, Strategy};
use crate::traits::{PathSolver, StepCounter};
use crate::utils::format_sequence;
use crate::validate::validate;

/// Where a report's sequence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOrigin {
    /// Produced by the selected strategy itself.
    Native,
    /// The selected strategy counts only; the sequence comes from a
    /// bottom-up run used for display.
    BottomUpFallback,
}

/// Outcome of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub strategy: Strategy,
    pub n: u64,
    pub steps: u64,
    /// Present when a path was requested or the strategy yields one natively.
    pub operations: Option<Vec<Operation>>,
    pub path_origin: Option<PathOrigin>,
}

impl Report {
    /// Space-separated tokens of the sequence, if any.
    pub fn path_tokens(&self) -> Option<String> {
        self.operations.as_deref().map(format_sequence)
    }

    /// Replay the carried sequence against `n`. A report without a sequence
    /// is trivially valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.operations {
            Some(ops) => validate(self.n, ops),
            None => Ok(()),
        }
    }
}

/// Configured solver front-end. Build one with [`Engine::new`] or
/// [`EngineBuilder`](crate::builder::EngineBuilder).
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    strategy: Strategy,
    recursive: Recursive,
    memoized: Memoized,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl Engine {
    /// Engine for `strategy` with default recursion bounds.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_parts(strategy, Recursive::new(), Memoized::new())
    }

    pub(crate) fn with_parts(strategy: Strategy, recursive: Recursive, memoized: Memoized) -> Self {
        Self {
            strategy,
            recursive,
            memoized,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Largest `n` the naive recursion will accept.
    pub fn recursive_limit(&self) -> u64 {
        self.recursive.max_n()
    }

    /// Largest `n` the memoized recursion will accept.
    pub fn memo_depth_limit(&self) -> u64 {
        self.memoized.max_depth()
    }

    /// The selected strategy as a step counter.
    pub fn counter(&self) -> &dyn StepCounter {
        match self.strategy {
            Strategy::Recursive => &self.recursive,
            Strategy::Memoized => &self.memoized,
            Strategy::BottomUp => &BottomUp,
            Strategy::Bfs => &Bfs,
        }
    }

    /// The selected strategy as a path solver, when it is one.
    pub fn path_solver(&self) -> Option<&dyn PathSolver> {
        match self.strategy {
            Strategy::BottomUp => Some(&BottomUp),
            Strategy::Bfs => Some(&Bfs),
            Strategy::Recursive | Strategy::Memoized => None,
        }
    }

    /// Whether `n` is within the selected strategy's recursion bound.
    pub fn accepts(&self, n: u64) -> bool {
        match self.strategy {
            Strategy::Recursive => n <= self.recursive.max_n(),
            Strategy::Memoized => n <= self.memoized.max_depth(),
            Strategy::BottomUp | Strategy::Bfs => true,
        }
    }

    /// Solve for `n`.
    ///
    /// With `with_path`, count-only strategies get their sequence from a
    /// bottom-up run; the count always comes from the selected strategy.
    pub fn run(&self, n: u64, with_path: bool) -> Result<Report, SolveError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("engine_run", strategy = %self.strategy, n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if let Some(solver) = self.path_solver() {
            let solution = solver.solve(n)?;
            return Ok(Report {
                strategy: self.strategy,
                n,
                steps: solution.steps,
                operations: Some(solution.operations),
                path_origin: Some(PathOrigin::Native),
            });
        }

        let steps = self.counter().min_steps(n)?;
        let (operations, path_origin) = if with_path {
            #[cfg(feature = "tracing")]
            tracing::debug!("strategy yields no path; reconstructing with bottom-up");
            let solution = BottomUp.solve(n)?;
            (Some(solution.operations), Some(PathOrigin::BottomUpFallback))
        } else {
            (None, None)
        };

        Ok(Report {
            strategy: self.strategy,
            n,
            steps,
            operations,
            path_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_strategy_solves_ten() {
        for strategy in Strategy::iter() {
            let report = Engine::new(strategy).run(10, true).unwrap();
            assert_eq!(report.steps, 3, "{strategy}");
            assert_eq!(report.path_tokens().as_deref(), Some("-1 /3 /3"));
            assert!(report.validate().is_ok());
        }
    }

    #[test]
    fn count_only_strategies_fall_back_for_paths() {
        let report = Engine::new(Strategy::Memoized).run(10, true).unwrap();
        assert_eq!(report.path_origin, Some(PathOrigin::BottomUpFallback));

        let report = Engine::new(Strategy::Memoized).run(10, false).unwrap();
        assert_eq!(report.operations, None);
        assert_eq!(report.path_origin, None);
        assert!(report.validate().is_ok());
    }

    #[test]
    fn native_paths_are_marked() {
        let report = Engine::new(Strategy::Bfs).run(10, false).unwrap();
        assert_eq!(report.path_origin, Some(PathOrigin::Native));
    }

    #[test]
    fn recursion_bound_surfaces_as_error() {
        let engine = Engine::new(Strategy::Recursive);
        assert!(!engine.accepts(21));
        assert!(matches!(
            engine.run(21, false),
            Err(SolveError::RecursionLimit { limit: 20, .. })
        ));
    }

    #[test]
    fn default_is_bottom_up() {
        assert_eq!(Engine::default().strategy(), Strategy::BottomUp);
        assert_eq!(Engine::default().counter().strategy(), Strategy::BottomUp);
    }
}
