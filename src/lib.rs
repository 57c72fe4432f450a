//! Countdown to one
//!
//! Minimum number of operations reducing a positive integer `n` to `1`, where
//! each step is one of: subtract 1, halve (when even), or divide by 3 (when
//! divisible). Besides the count, the crate reconstructs one optimal
//! operation sequence and validates arbitrary sequences by replay.
//!
//! ## Strategies
//! All strategies implement the same recurrence
//! `f(1) = 0`, `f(n) = 1 + min(f(n-1), f(n/2) if 2|n, f(n/3) if 3|n)`:
//! - [`strategies::Recursive`]: plain recursion, exponential; bounded to
//!   small `n`.
//! - [`strategies::Memoized`]: recursion with a per-call cache; linear work,
//!   depth bounded up front.
//! - [`strategies::BottomUp`]: ascending tabulation with predecessor links;
//!   the recommended engine.
//! - [`strategies::Bfs`]: level-order search over the integer graph.
//!
//! ## Quick start
//! ```
//! use countdown_dp::{strategies::BottomUp, validate::is_valid, PathSolver};
//!
//! let solution = BottomUp.solve(10).unwrap();
//! assert_eq!(solution.steps, 3);
//! assert!(is_valid(10, &solution.operations));
//! ```
//!
//! Ties between equally short candidates are broken in the fixed order
//! `-1`, `/2`, `/3`: a later operation only replaces an earlier one on strict
//! improvement. So `n = 2` solves as `-1`.

pub mod builder;
pub mod consistency;
pub mod engine;
pub mod error;
pub mod ops;
pub mod strategies;
pub mod table;
pub mod traits;
pub mod utils;
pub mod validate;

pub use crate::builder::EngineBuilder;
pub use crate::engine::{Engine, PathOrigin, Report};
pub use crate::error::{SolveError, ValidationError};
pub use crate::ops::Operation;
pub use crate::strategies::Strategy;
pub use crate::traits::{PathSolver, Solution, StepCounter};
