//! The closed set of reducing operations.
//!
//! Every path from `n` to `1` is a sequence of [`Operation`]s. Each variant
//! carries a guard (when it may be applied) and a transform (what it does to
//! the running value). The textual tokens `-1`, `/2`, `/3` exist only at the
//! display/parse boundary via `Display` and `FromStr`.

use strum::{Display, EnumIter, EnumString};

/// One state-reducing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Operation {
    /// `v -> v - 1`, always applicable while `v > 0`.
    #[strum(serialize = "-1")]
    Decrement,
    /// `v -> v / 2`, only when `v` is even.
    #[strum(serialize = "/2")]
    DivideBy2,
    /// `v -> v / 3`, only when `v` is divisible by 3.
    #[strum(serialize = "/3")]
    DivideBy3,
}

impl Operation {
    /// Relaxation order used by every strategy. Ties are resolved in favour
    /// of the earlier entry.
    pub const ALL: [Operation; 3] = [
        Operation::Decrement,
        Operation::DivideBy2,
        Operation::DivideBy3,
    ];

    /// Whether the operation may be applied to `value`.
    #[inline]
    pub fn applies_to(self, value: u64) -> bool {
        match self {
            Operation::Decrement => value > 0,
            Operation::DivideBy2 => value % 2 == 0,
            Operation::DivideBy3 => value % 3 == 0,
        }
    }

    /// Apply the transform without checking the guard.
    #[inline]
    pub fn transform(self, value: u64) -> u64 {
        match self {
            Operation::Decrement => value - 1,
            Operation::DivideBy2 => value / 2,
            Operation::DivideBy3 => value / 3,
        }
    }

    /// Guarded application: `None` when the guard rejects `value`.
    #[inline]
    pub fn apply(self, value: u64) -> Option<u64> {
        self.applies_to(value).then(|| self.transform(value))
    }
}
