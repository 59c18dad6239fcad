//! HTTP API Tests
//!
//! Drives the full router in-process and checks status codes and JSON bodies.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use product_catalog::catalog::generator::generate_catalog;
use product_catalog::router::build_router;
use product_catalog::search::engine::SearchEngine;
use product_catalog::search::types::SearchOptions;
use product_catalog::search::window::{ClockWindow, FixedWindow, WindowStart};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app(window: Arc<dyn WindowStart>) -> Router {
    let catalog = Arc::new(generate_catalog(1_000));
    let engine = Arc::new(SearchEngine::new(
        catalog.clone(),
        window,
        SearchOptions::default(),
    ));
    build_router(catalog, engine, 5)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// ============================================================
// HEALTH
// ============================================================

#[tokio::test]
async fn test_health_returns_ok() {
    let app = create_test_app(Arc::new(ClockWindow));

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

// ============================================================
// LOOKUP
// ============================================================

#[tokio::test]
async fn test_get_product_returns_record() {
    let app = create_test_app(Arc::new(ClockWindow));

    let (status, json) = get_json(app, "/products/11").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "id": 11,
            "name": "Product Beta 11",
            "category": "Books",
            "description": "A reliable product for everyday use.",
            "brand": "Beta",
        })
    );
}

#[tokio::test]
async fn test_get_product_invalid_ids() {
    for uri in ["/products/0", "/products/-5", "/products/abc", "/products/1.5"] {
        let app = create_test_app(Arc::new(ClockWindow));

        let (status, json) = get_json(app, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
        assert_eq!(json["error"], "INVALID_INPUT");
        assert_eq!(json["message"], "Product ID must be a positive integer");
    }
}

#[tokio::test]
async fn test_get_product_not_found() {
    let app = create_test_app(Arc::new(ClockWindow));

    let (status, json) = get_json(app, "/products/1001").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NOT_FOUND");
    assert_eq!(json["message"], "Product not found");
}

// ============================================================
// SAMPLE
// ============================================================

#[tokio::test]
async fn test_sample_products() {
    let app = create_test_app(Arc::new(ClockWindow));

    let (status, json) = get_json(app, "/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_generated"], 1_000);
    let sample = json["sample_products"].as_array().unwrap();
    assert_eq!(sample.len(), 5);
    for product in sample {
        let id = product["id"].as_u64().unwrap();
        assert!((1..=1_000).contains(&id));
    }
}

// ============================================================
// SEARCH
// ============================================================

#[tokio::test]
async fn test_search_window_at_zero() {
    let app = create_test_app(Arc::new(FixedWindow(0)));

    let (status, json) = get_json(app, "/products/search?q=beta").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_found"], 10);
    let ids: Vec<u64> = json["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 11, 21, 31, 41, 51, 61, 71, 81, 91]);
    assert!(json["search_time"].is_string());
}

#[tokio::test]
async fn test_search_query_is_case_insensitive_and_trimmed() {
    let app = create_test_app(Arc::new(FixedWindow(0)));

    let (status, json) = get_json(app, "/products/search?q=%20%20BOOKS%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_found"], 10);
}

#[tokio::test]
async fn test_search_without_query_matches_whole_window() {
    let app = create_test_app(Arc::new(ClockWindow));

    let (status, json) = get_json(app, "/products/search").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_found"], 100);
    assert_eq!(json["products"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_search_results_never_exceed_cap() {
    for query in ["", "product", "alpha", "electronics", "nothing-here"] {
        let app = create_test_app(Arc::new(ClockWindow));

        let (status, json) = get_json(app, &format!("/products/search?q={}", query)).await;

        assert_eq!(status, StatusCode::OK);
        let returned = json["products"].as_array().unwrap().len() as u64;
        let found = json["total_found"].as_u64().unwrap();
        assert!(returned <= 20);
        assert!(found >= returned);
        assert!(found <= 100);
    }
}

#[tokio::test]
async fn test_search_repeated_param_uses_first_value() {
    let app = create_test_app(Arc::new(FixedWindow(0)));

    let (status, json) = get_json(app, "/products/search?q=beta&q=books").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_found"], 10);
    let products = json["products"].as_array().unwrap();
    assert!(products.iter().all(|p| p["brand"] == "Beta"));

    let app = create_test_app(Arc::new(FixedWindow(0)));
    let (status, json) = get_json(app, "/products/search?q=zzz&q=beta").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_found"], 0);
}

#[tokio::test]
async fn test_search_malformed_query_strings_still_answer() {
    for uri in [
        "/products/search?q=%FF",
        "/products/search?q",
        "/products/search?q=%",
        "/products/search?other=1",
        "/products/search?&&=",
    ] {
        let app = create_test_app(Arc::new(FixedWindow(0)));

        let (status, json) = get_json(app, uri).await;

        assert_eq!(status, StatusCode::OK, "uri {}", uri);
        assert!(json["total_found"].as_u64().unwrap() <= 100);
        assert!(json["products"].as_array().unwrap().len() <= 20);
    }
}
