use crate::engine::Engine;
use crate::strategies::memoized::DEFAULT_MAX_DEPTH;
use crate::strategies::recursive::DEFAULT_MAX_N;
use crate::strategies::{Memoized, Recursive, Strategy};

pub struct EngineBuilder {
    strategy: Strategy,
    recursive_limit: Option<u64>,
    memo_depth_limit: Option<u64>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            recursive_limit: None,
            memo_depth_limit: None,
        }
    }
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
    pub fn with_recursive_limit(mut self, max_n: u64) -> Self {
        self.recursive_limit = Some(max_n);
        self
    }
    pub fn with_memo_depth_limit(mut self, max_depth: u64) -> Self {
        self.memo_depth_limit = Some(max_depth);
        self
    }
    pub fn build(self) -> Engine {
        let recursive = Recursive::with_max_n(self.recursive_limit.unwrap_or(DEFAULT_MAX_N));
        let memoized = Memoized::with_max_depth(self.memo_depth_limit.unwrap_or(DEFAULT_MAX_DEPTH));
        Engine::with_parts(self.strategy, recursive, memoized)
    }
}
