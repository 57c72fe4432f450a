//! Cross-checking strategies against each other.
//!
//! [`check_value`] runs every strategy whose bound admits `n`, compares the
//! counts against the bottom-up engine, and replays every produced sequence.
//! [`check_range`] does this for a whole range; with the `parallel` feature
//! the values are distributed over rayon's thread pool.

use std::ops::RangeInclusive;

use strum::IntoEnumIterator;

use crate::builder::EngineBuilder;
use crate::engine::Engine;
use crate::error::{SolveError, ValidationError};
use crate::strategies::Strategy;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A disagreement found for one `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// A strategy reported a different count than the bottom-up reference.
    Count {
        n: u64,
        strategy: Strategy,
        expected: u64,
        actual: u64,
    },
    /// A produced sequence failed replay.
    InvalidPath {
        n: u64,
        strategy: Strategy,
        error: ValidationError,
    },
    /// The reported count and the sequence length differ.
    LengthMismatch {
        n: u64,
        strategy: Strategy,
        steps: u64,
        path_len: usize,
    },
    /// A strategy failed outright.
    Failed {
        n: u64,
        strategy: Strategy,
        error: SolveError,
    },
}

/// Bounds for which strategies participate in a check.
#[derive(Debug, Clone, Copy)]
pub struct CheckConfig {
    pub recursive_limit: u64,
    pub memo_depth_limit: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            recursive_limit: crate::strategies::recursive::DEFAULT_MAX_N,
            memo_depth_limit: crate::strategies::memoized::DEFAULT_MAX_DEPTH,
        }
    }
}

impl CheckConfig {
    fn engine(&self, strategy: Strategy) -> Engine {
        EngineBuilder::new()
            .strategy(strategy)
            .with_recursive_limit(self.recursive_limit)
            .with_memo_depth_limit(self.memo_depth_limit)
            .build()
    }
}

/// Check all admissible strategies for a single `n`.
pub fn check_value(n: u64, config: &CheckConfig) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    let reference = match config.engine(Strategy::BottomUp).run(n, true) {
        Ok(report) => report,
        Err(error) => {
            mismatches.push(Mismatch::Failed {
                n,
                strategy: Strategy::BottomUp,
                error,
            });
            return mismatches;
        }
    };

    for strategy in Strategy::iter() {
        let engine = config.engine(strategy);
        if !engine.accepts(n) {
            continue;
        }
        let report = match engine.run(n, false) {
            Ok(report) => report,
            Err(error) => {
                mismatches.push(Mismatch::Failed { n, strategy, error });
                continue;
            }
        };
        if report.steps != reference.steps {
            mismatches.push(Mismatch::Count {
                n,
                strategy,
                expected: reference.steps,
                actual: report.steps,
            });
        }
        if let Some(ops) = &report.operations {
            if ops.len() as u64 != report.steps {
                mismatches.push(Mismatch::LengthMismatch {
                    n,
                    strategy,
                    steps: report.steps,
                    path_len: ops.len(),
                });
            }
        }
        if let Err(error) = report.validate() {
            mismatches.push(Mismatch::InvalidPath { n, strategy, error });
        }
    }
    mismatches
}

/// Check every `n` in `range`, collecting all mismatches in ascending `n`.
pub fn check_range(range: RangeInclusive<u64>, config: &CheckConfig) -> Vec<Mismatch> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("check_range", start = *range.start(), end = *range.end());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    #[cfg(feature = "parallel")]
    {
        range
            .into_par_iter()
            .flat_map_iter(|n| check_value(n, config))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        range.flat_map(|n| check_value(n, config)).collect()
    }
}
