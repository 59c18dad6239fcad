use crate::catalog::types::Product;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Positions scanned per search.
pub const DEFAULT_CHECK_LIMIT: usize = 100;
/// Matches returned per search.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Per-search budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Number of ID-sequence positions visited, independent of the match rate.
    pub check_limit: usize,
    /// Cap on returned products; `total_found` is not truncated.
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            check_limit: DEFAULT_CHECK_LIMIT,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Result of scanning one window.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// First matches in scan order.
    pub products: Vec<Product>,
    /// All matches in the window.
    pub total_found: usize,
    /// Window positions visited.
    pub visited: usize,
    /// Visited positions whose ID resolved to a product.
    pub checked: usize,
    /// Index into the ID sequence where the scan began.
    pub start: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
    pub total_found: usize,
    /// Scan duration rendered like `"12.3µs"`.
    pub search_time: String,
}
