use super::types::{BRANDS, CATEGORIES, DESCRIPTION, Product};
use crate::storage::memory::{Catalog, ProductStore};
use std::time::Instant;

/// Builds the full catalog with IDs `1..=total`.
///
/// Runs once at startup, before the HTTP listener is bound, so no request ever observes a
/// partially populated store.
pub fn generate_catalog(total: usize) -> Catalog {
    let started = Instant::now();
    let store = ProductStore::with_capacity(total);
    let mut ids = Vec::with_capacity(total);

    for id in 1..=total as u64 {
        store.insert(build_product(id));
        ids.push(id);
    }

    tracing::info!("Generated {} products in {:?}", total, started.elapsed());

    Catalog::from_parts(store, ids)
}

/// Derives the record for `id` from the rotating brand and category lists.
pub fn build_product(id: u64) -> Product {
    let brand = BRANDS[(id % BRANDS.len() as u64) as usize];
    let category = CATEGORIES[(id % CATEGORIES.len() as u64) as usize];

    Product {
        id,
        name: format!("Product {} {}", brand, id),
        category: category.to_string(),
        description: DESCRIPTION.to_string(),
        brand: brand.to_string(),
    }
}
