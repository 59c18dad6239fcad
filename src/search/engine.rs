use super::query::{matches, normalize_query};
use super::types::{SearchOptions, SearchOutcome};
use super::window::WindowStart;
use crate::storage::memory::Catalog;
use std::sync::Arc;
use std::time::Instant;

/// Runs windowed searches against a shared catalog.
///
/// Holds no per-search state, so a single instance serves any number of concurrent requests.
pub struct SearchEngine {
    catalog: Arc<Catalog>,
    window: Arc<dyn WindowStart>,
    options: SearchOptions,
}

impl SearchEngine {
    pub fn new(
        catalog: Arc<Catalog>,
        window: Arc<dyn WindowStart>,
        options: SearchOptions,
    ) -> Self {
        Self {
            catalog,
            window,
            options,
        }
    }

    /// Scans one window, starting wherever the configured `WindowStart` points.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let start = self.window.start_index(self.catalog.total());
        search_window(&self.catalog, query, start, &self.options)
    }
}

/// Scans exactly `options.check_limit` positions of the ID sequence beginning at `start`,
/// wrapping around the end.
///
/// A position whose ID does not resolve in the store is skipped: it still counts as visited
/// but not as checked. `total_found` counts every match in the window while `products`
/// keeps only the first `options.max_results` of them, in scan order.
pub fn search_window(
    catalog: &Catalog,
    query: &str,
    start: usize,
    options: &SearchOptions,
) -> SearchOutcome {
    let started = Instant::now();
    let query = normalize_query(query);
    let ids = catalog.ids();

    let mut outcome = SearchOutcome::default();
    if ids.is_empty() {
        outcome.elapsed = started.elapsed();
        return outcome;
    }

    let start = start % ids.len();
    outcome.start = start;

    for offset in 0..options.check_limit {
        let id = ids[(start + offset) % ids.len()];
        outcome.visited += 1;

        let Some(entry) = catalog.store().get_ref(id) else {
            tracing::warn!("SEARCH: id {} missing from store, skipping", id);
            continue;
        };
        outcome.checked += 1;

        let product = entry.value();
        if matches(product, &query) {
            outcome.total_found += 1;
            if outcome.products.len() < options.max_results {
                outcome.products.push(product.clone());
            }
        }
    }

    outcome.elapsed = started.elapsed();
    outcome
}
