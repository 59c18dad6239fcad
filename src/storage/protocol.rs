//! Storage HTTP Protocol
//!
//! Defines the public endpoints and Data Transfer Objects (DTOs) for product lookup and
//! sampling.

use crate::catalog::types::Product;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Sample listing of a few products.
pub const ENDPOINT_PRODUCTS: &str = "/products";
/// Point lookup by ID.
pub const ENDPOINT_PRODUCT_BY_ID: &str = "/products/:id";

// --- Data Transfer Objects ---

/// Response for the sample listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SampleResponse {
    /// Size of the whole catalog, not of the sample.
    pub total_generated: usize,
    pub sample_products: Vec<Product>,
}

/// Body returned with every 4xx lookup response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable code (`INVALID_INPUT`, `NOT_FOUND`).
    pub error: String,
    /// Human-readable explanation.
    pub message: String,
}
