use crate::catalog::types::Product;

/// Trims surrounding whitespace and lowercases the raw query.
///
/// An empty result means "match everything".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring match against the name or the category.
///
/// `query` must already be normalized.
pub fn matches(product: &Product, query: &str) -> bool {
    query.is_empty()
        || product.name.to_lowercase().contains(query)
        || product.category.to_lowercase().contains(query)
}
