//! Bottom-up tabulation with predecessor links.
//!
//! Values are filled in ascending order `2..=n`. Each value starts from the
//! decrement candidate and is then relaxed by `/2` and `/3`, in that order,
//! overwriting only on strict improvement. Among equal-cost candidates the
//! earliest checked one therefore wins: `n = 2` resolves to `-1`, not `/2`.
//!
//! No recursion; linear time and space in `n`.

use crate::error::SolveError;
use crate::ops::Operation;
use crate::strategies::Strategy;
use crate::table::{DpRecord, DpTable};
use crate::traits::{PathSolver, Solution, StepCounter};
use crate::utils::ensure_positive;

#[derive(Debug, Clone, Copy, Default)]
pub struct BottomUp;

impl BottomUp {
    pub fn new() -> Self {
        Self
    }

    /// Build the full table for `1..=n`.
    pub fn table(&self, n: u64) -> Result<DpTable, SolveError> {
        let n = ensure_positive(n)?;

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("build_table", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = DpTable::try_with_capacity(n)?;
        for x in 2..=n {
            table.push(relax(&table, x));
        }
        Ok(table)
    }
}

/// Optimal record for `x`, given records for every value below it.
fn relax(table: &DpTable, x: u64) -> DpRecord {
    let steps_of = |v: u64| table.steps(v).unwrap_or(u64::MAX - 1);

    let mut best = DpRecord {
        steps: 1 + steps_of(x - 1),
        predecessor: x - 1,
        operation: Some(Operation::Decrement),
    };
    for op in [Operation::DivideBy2, Operation::DivideBy3] {
        if let Some(prev) = op.apply(x) {
            let candidate = 1 + steps_of(prev);
            if candidate < best.steps {
                best = DpRecord {
                    steps: candidate,
                    predecessor: prev,
                    operation: Some(op),
                };
            }
        }
    }
    best
}

impl StepCounter for BottomUp {
    fn strategy(&self) -> Strategy {
        Strategy::BottomUp
    }

    fn min_steps(&self, n: u64) -> Result<u64, SolveError> {
        let table = self.table(n)?;
        Ok(table.steps(n).unwrap_or_default())
    }
}

impl PathSolver for BottomUp {
    fn solve(&self, n: u64) -> Result<Solution, SolveError> {
        if ensure_positive(n)? == 1 {
            return Ok(Solution::empty());
        }
        let table = self.table(n)?;
        let operations = table.path_from(n).unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::trace!(n, steps = operations.len(), "reconstructed bottom-up path");
        Ok(Solution::from_operations(operations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Operation::*;

    #[test]
    fn base_case_is_empty() {
        assert_eq!(BottomUp.solve(1), Ok(Solution::empty()));
        assert_eq!(BottomUp.min_steps(1), Ok(0));
    }

    #[test]
    fn tie_prefers_decrement() {
        let s = BottomUp.solve(2).unwrap();
        assert_eq!(s.steps, 1);
        assert_eq!(s.operations, vec![Decrement]);
    }

    #[test]
    fn ten_goes_through_nine() {
        let s = BottomUp.solve(10).unwrap();
        assert_eq!(s.steps, 3);
        assert_eq!(s.operations, vec![Decrement, DivideBy3, DivideBy3]);
    }

    #[test]
    fn known_paths() {
        assert_eq!(
            BottomUp.solve(20).unwrap().operations,
            vec![DivideBy2, Decrement, DivideBy3, DivideBy3]
        );
        assert_eq!(
            BottomUp.solve(24).unwrap().operations,
            vec![DivideBy2, DivideBy2, DivideBy2, DivideBy3]
        );
        let s = BottomUp.solve(780).unwrap();
        assert_eq!(s.steps, 10);
        assert_eq!(
            s.operations,
            vec![
                DivideBy2, DivideBy2, DivideBy3, Decrement, Decrement, DivideBy3, DivideBy3,
                Decrement, DivideBy2, DivideBy3
            ]
        );
    }

    #[test]
    fn table_is_exactly_n_long() {
        let table = BottomUp.table(30).unwrap();
        assert_eq!(table.max_value(), 30);
        assert_eq!(table.get(31), None);
        assert_eq!(table.steps(27), Some(3));
        let r = table.get(6).unwrap();
        // /2 and /3 both reach 6 in two steps; /2 is checked first.
        assert_eq!(r.operation, Some(DivideBy2));
        assert_eq!(r.predecessor, 3);
    }

    #[test]
    fn oversized_table_is_reported() {
        let n = u64::MAX / 2;
        assert_eq!(BottomUp.solve(n), Err(SolveError::TableTooLarge(n)));
        assert_eq!(BottomUp.min_steps(n), Err(SolveError::TableTooLarge(n)));
    }

    #[test]
    fn zero_rejected() {
        assert_eq!(BottomUp.solve(0), Err(SolveError::NonPositive(0)));
        assert!(BottomUp.table(0).is_err());
    }
}
