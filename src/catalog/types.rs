//! Catalog Data Types
//!
//! Defines the product record served by every endpoint and the fixed value lists the
//! generator rotates through.

use serde::{Deserialize, Serialize};

/// Brands assigned by `id % BRANDS.len()`.
pub const BRANDS: [&str; 10] = [
    "Alpha", "Beta", "Gamma", "Delta", "Omega", "Nova", "Apex", "Orion", "Epsilon", "Zeta",
];

/// Categories assigned by `id % CATEGORIES.len()`.
pub const CATEGORIES: [&str; 10] = [
    "Electronics",
    "Books",
    "Home",
    "Toys",
    "Sports",
    "Clothing",
    "Beauty",
    "Garden",
    "Office",
    "Grocery",
];

/// Description shared by every generated product.
pub const DESCRIPTION: &str = "A reliable product for everyday use.";

/// A single catalog entry.
///
/// Records are immutable once generated. `name` and `category` are the searchable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub brand: String,
}
