//! Solving strategies.
//!
//! All four compute the same minimal count; they differ in cost and in
//! whether they produce a sequence:
//! - [`recursive`]  : direct exponential recursion, a reference for small n.
//! - [`memoized`]   : the same recurrence with a per-call cache.
//! - [`bottom_up`]  : ascending tabulation with predecessor links.
//! - [`bfs`]        : level-order search over the implicit integer graph.

use strum::{Display, EnumIter, EnumString};

pub mod bfs;
pub mod bottom_up;
pub mod memoized;
pub mod recursive;

pub use bfs::Bfs;
pub use bottom_up::BottomUp;
pub use memoized::Memoized;
pub use recursive::Recursive;

/// Tag selecting a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum Strategy {
    #[strum(to_string = "recursive", serialize = "rec")]
    Recursive,
    #[strum(to_string = "memoized", serialize = "memo")]
    Memoized,
    #[default]
    #[strum(to_string = "bottom-up-dp", serialize = "dp")]
    BottomUp,
    #[strum(to_string = "bfs")]
    Bfs,
}

impl Strategy {
    /// Whether the strategy reconstructs a sequence on its own.
    pub fn yields_path(self) -> bool {
        matches!(self, Strategy::BottomUp | Strategy::Bfs)
    }

    /// Whether the strategy recurses and therefore carries a depth bound.
    pub fn is_recursive(self) -> bool {
        matches!(self, Strategy::Recursive | Strategy::Memoized)
    }
}
