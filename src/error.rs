//! Error types shared by all strategies.

use thiserror::Error;

use crate::ops::Operation;
use crate::strategies::Strategy;

/// Failure of a solver call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("n must be a positive integer, got {0}")]
    NonPositive(i64),

    #[error("n = {n} exceeds the {strategy} recursion limit of {limit}; switch to an iterative strategy (bottom-up-dp or bfs)")]
    RecursionLimit {
        strategy: Strategy,
        n: u64,
        limit: u64,
    },

    #[error("n = {0} is too large to tabulate on this platform")]
    TableTooLarge(u64),

    #[error("internal error: breadth-first search exhausted its frontier without reaching 1 from {0}")]
    NoPath(u64),

    #[error("invalid operation sequence: {0}")]
    InvalidSequence(#[from] ValidationError),
}

/// Reason an operation sequence fails to replay from `n` down to `1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("step {step}: {operation} cannot be applied to {value}")]
    NotDivisible {
        step: usize,
        value: u64,
        operation: Operation,
    },

    #[error("step {step}: -1 applied to 0")]
    Underflow { step: usize },

    #[error("sequence ends at {value}, expected 1")]
    WrongEndpoint { value: u64 },
}
