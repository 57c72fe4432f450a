//! Tabulated optimum for every value `1..=n`.
//!
//! Each [`DpRecord`] stores the optimal count of one value together with the
//! predecessor link that achieved it. Records are only appended in ascending
//! order by the bottom-up engine; afterwards the table is read-only.

use std::mem::size_of;

use crate::error::SolveError;
use crate::ops::Operation;

/// Optimal count for one value and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpRecord {
    /// Minimal number of operations from this value down to 1.
    pub steps: u64,
    /// Value the optimal first operation leads to. `0` for the base value 1.
    pub predecessor: u64,
    /// Operation applied to this value to reach `predecessor`.
    /// `None` only for the base value 1.
    pub operation: Option<Operation>,
}

impl DpRecord {
    pub(crate) const BASE: DpRecord = DpRecord {
        steps: 0,
        predecessor: 0,
        operation: None,
    };
}

/// Records for values `1..=n`, stored at index `value - 1`.
#[derive(Debug, Clone)]
pub struct DpTable {
    records: Vec<DpRecord>,
}

impl DpTable {
    /// Reserve room for `1..=n` up front, failing instead of aborting when
    /// the table cannot be addressed or allocated.
    pub(crate) fn try_with_capacity(n: u64) -> Result<Self, SolveError> {
        let len = usize::try_from(n).map_err(|_| SolveError::TableTooLarge(n))?;
        len.checked_mul(size_of::<DpRecord>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(SolveError::TableTooLarge(n))?;

        let mut records = Vec::new();
        records
            .try_reserve_exact(len.max(1))
            .map_err(|_| SolveError::TableTooLarge(n))?;
        records.push(DpRecord::BASE);
        Ok(Self { records })
    }

    pub(crate) fn push(&mut self, record: DpRecord) {
        self.records.push(record);
    }

    /// Largest value covered by the table.
    #[inline]
    pub fn max_value(&self) -> u64 {
        self.records.len() as u64
    }

    /// Record for `value`, or `None` when outside `1..=max_value()`.
    #[inline]
    pub fn get(&self, value: u64) -> Option<&DpRecord> {
        let idx = usize::try_from(value.checked_sub(1)?).ok()?;
        self.records.get(idx)
    }

    /// Optimal count for `value`, if tabulated.
    #[inline]
    pub fn steps(&self, value: u64) -> Option<u64> {
        self.get(value).map(|r| r.steps)
    }

    /// Walk predecessor links from `value` down to 1.
    ///
    /// Returns `None` when `value` is outside the table. Predecessors are
    /// strictly smaller than their value, so the walk always terminates.
    pub fn path_from(&self, value: u64) -> Option<Vec<Operation>> {
        let mut record = self.get(value)?;
        let mut operations = Vec::with_capacity(record.steps as usize);
        while let Some(op) = record.operation {
            operations.push(op);
            record = self.get(record.predecessor)?;
        }
        Some(operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> DpTable {
        // 1 <- 2 (-1) <- 3 (/3) <- 4 (-1 to 3)
        let mut t = DpTable::try_with_capacity(4).unwrap();
        t.push(DpRecord {
            steps: 1,
            predecessor: 1,
            operation: Some(Operation::Decrement),
        });
        t.push(DpRecord {
            steps: 1,
            predecessor: 1,
            operation: Some(Operation::DivideBy3),
        });
        t.push(DpRecord {
            steps: 2,
            predecessor: 3,
            operation: Some(Operation::Decrement),
        });
        t
    }

    #[test]
    fn lookup_is_one_based() {
        let t = small_table();
        assert_eq!(t.max_value(), 4);
        assert_eq!(t.get(0), None);
        assert_eq!(t.get(1), Some(&DpRecord::BASE));
        assert_eq!(t.steps(4), Some(2));
        assert_eq!(t.get(5), None);
    }

    #[test]
    fn unaddressable_size_is_an_error() {
        assert_eq!(
            DpTable::try_with_capacity(u64::MAX / 2).unwrap_err(),
            SolveError::TableTooLarge(u64::MAX / 2)
        );
        assert_eq!(
            DpTable::try_with_capacity(u64::MAX).unwrap_err(),
            SolveError::TableTooLarge(u64::MAX)
        );
    }

    #[test]
    fn path_walks_predecessors() {
        let t = small_table();
        assert_eq!(t.path_from(1), Some(vec![]));
        assert_eq!(
            t.path_from(4),
            Some(vec![Operation::Decrement, Operation::DivideBy3])
        );
        assert_eq!(t.path_from(9), None);
    }
}
