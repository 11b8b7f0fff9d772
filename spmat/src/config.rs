//! Engine configuration
//!
//! Controls how [`Operation::apply_with`](crate::Operation::apply_with)
//! runs multiplication. Addition and subtraction always run sequentially.

/// Configuration for the arithmetic engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Allow row-partitioned parallel multiplication
    pub parallel: bool,
    /// Minimum non-zeros in the left operand before going parallel
    pub parallel_threshold: usize,
    /// Worker count for a dedicated pool; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl EngineConfig {
    /// Default non-zero count at which parallel multiplication pays off
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

    /// Sequential configuration
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Enable or disable parallel multiplication
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the left-operand non-zero count that triggers parallel work
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Run parallel work on a dedicated pool of `threads` workers
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Whether a multiplication with `lhs_nnz` left non-zeros goes parallel
    pub fn use_parallel(&self, lhs_nnz: usize) -> bool {
        self.parallel && lhs_nnz >= self.parallel_threshold
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
            threads: None,
        }
    }
}
