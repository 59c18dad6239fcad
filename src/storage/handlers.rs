use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::error::LookupError;
use super::memory::Catalog;
use super::protocol::{ErrorResponse, SampleResponse};

/// Maximum number of products returned by the sample listing.
#[derive(Debug, Clone, Copy)]
pub struct SampleLimit(pub usize);

pub async fn handle_get_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id_str): Path<String>,
) -> Response {
    let result = id_str
        .parse::<i64>()
        .map_err(|_| LookupError::InvalidInput)
        .and_then(|id| catalog.get(id));

    match result {
        Ok(product) => {
            tracing::debug!("GET: Found product {}", product.id);
            (StatusCode::OK, Json(product)).into_response()
        }
        Err(e) => {
            tracing::debug!("GET: Lookup for '{}' failed: {}", id_str, e);
            lookup_error_response(e)
        }
    }
}

pub async fn handle_sample_products(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(SampleLimit(limit)): Extension<SampleLimit>,
) -> (StatusCode, Json<SampleResponse>) {
    (
        StatusCode::OK,
        Json(SampleResponse {
            total_generated: catalog.total(),
            sample_products: catalog.sample(limit),
        }),
    )
}

fn lookup_error_response(err: LookupError) -> Response {
    let status = match err {
        LookupError::InvalidInput => StatusCode::BAD_REQUEST,
        LookupError::NotFound(_) => StatusCode::NOT_FOUND,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.code().to_string(),
            message: err.to_string(),
        }),
    )
        .into_response()
}
