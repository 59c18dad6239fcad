use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::search::engine::SearchEngine;
use crate::search::handlers::handle_search;
use crate::storage::handlers::{SampleLimit, handle_get_product, handle_sample_products};
use crate::storage::memory::Catalog;
use crate::storage::protocol::{ENDPOINT_PRODUCT_BY_ID, ENDPOINT_PRODUCTS};

/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";
/// Windowed search.
pub const ENDPOINT_SEARCH: &str = "/products/search";

/// Wires every public endpoint to its handler.
///
/// The catalog and engine are shared with handlers through `Extension` layers.
pub fn build_router(
    catalog: Arc<Catalog>,
    engine: Arc<SearchEngine>,
    sample_limit: usize,
) -> Router {
    Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_PRODUCTS, get(handle_sample_products))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_PRODUCT_BY_ID, get(handle_get_product))
        .layer(Extension(catalog))
        .layer(Extension(engine))
        .layer(Extension(SampleLimit(sample_limit)))
        .layer(TraceLayer::new_for_http())
}

async fn handle_health() -> &'static str {
    "ok"
}
