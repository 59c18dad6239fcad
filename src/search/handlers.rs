use super::engine::SearchEngine;
use super::types::SearchResponse;
use axum::extract::RawQuery;
use axum::{Extension, Json};
use std::sync::Arc;

/// Query-string key holding the search text.
pub const SEARCH_PARAM: &str = "q";

pub async fn handle_search(
    RawQuery(raw): RawQuery,
    Extension(engine): Extension<Arc<SearchEngine>>,
) -> Json<SearchResponse> {
    let query = raw
        .as_deref()
        .and_then(|raw| first_param(raw, SEARCH_PARAM))
        .unwrap_or_default();
    let outcome = engine.search(&query);

    tracing::debug!(
        "SEARCH: q={:?} start={} checked={}/{} found={} in {:?}",
        query,
        outcome.start,
        outcome.checked,
        outcome.visited,
        outcome.total_found,
        outcome.elapsed
    );

    Json(SearchResponse {
        products: outcome.products,
        total_found: outcome.total_found,
        search_time: format!("{:?}", outcome.elapsed),
    })
}

/// Returns the first value for `name`, ignoring any repeats.
///
/// A missing or undecodable parameter never fails the request; the caller falls back to the
/// empty query.
fn first_param(raw: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
