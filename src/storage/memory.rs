use super::error::LookupError;
use crate::catalog::types::Product;

use dashmap::DashMap;
use dashmap::mapref::one::Ref;

/// Concurrent ID -> product map.
///
/// Writes only happen while the catalog is being generated; afterwards every access is a
/// shard-local read, so concurrent handlers never wait on each other.
pub struct ProductStore {
    products: DashMap<u64, Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            products: DashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&self, product: Product) {
        self.products.insert(product.id, product);
    }

    /// Looks up a caller-supplied ID.
    ///
    /// # Returns
    /// * `Ok(Product)` if a product with that ID exists.
    /// * `Err(LookupError::InvalidInput)` if `id` is zero or negative.
    /// * `Err(LookupError::NotFound)` if the ID is well-formed but unknown.
    pub fn get(&self, id: i64) -> Result<Product, LookupError> {
        let key = u64::try_from(id)
            .ok()
            .filter(|&key| key > 0)
            .ok_or(LookupError::InvalidInput)?;

        self.get_ref(key)
            .map(|entry| entry.value().clone())
            .ok_or(LookupError::NotFound(id))
    }

    /// Borrows a stored product without cloning it.
    ///
    /// The returned guard holds a shard read lock; drop it before inserting.
    pub fn get_ref(&self, id: u64) -> Option<Ref<'_, u64, Product>> {
        self.products.get(&id)
    }

    /// Returns up to `limit` products in whatever order the map yields them.
    pub fn sample(&self, limit: usize) -> Vec<Product> {
        self.products
            .iter()
            .take(limit)
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide dataset: the product store plus the ordered sequence of every valid ID.
///
/// The sequence drives circular window scans; it never depends on the map's iteration order.
/// Built once and then shared behind an `Arc`.
pub struct Catalog {
    store: ProductStore,
    ids: Box<[u64]>,
}

impl Catalog {
    /// Assembles a catalog from an already populated store and its ID sequence.
    ///
    /// Every ID in `ids` is expected to resolve in `store`. Search tolerates violations by
    /// skipping the unresolved slot.
    pub(crate) fn from_parts(store: ProductStore, ids: Vec<u64>) -> Self {
        Self {
            store,
            ids: ids.into_boxed_slice(),
        }
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Number of generated products (the length of the ID sequence).
    pub fn total(&self) -> usize {
        self.ids.len()
    }

    pub fn get(&self, id: i64) -> Result<Product, LookupError> {
        self.store.get(id)
    }

    pub fn sample(&self, limit: usize) -> Vec<Product> {
        self.store.sample(limit)
    }
}
