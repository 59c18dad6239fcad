use clap::Parser;
use product_catalog::catalog::generator::generate_catalog;
use product_catalog::config::Config;
use product_catalog::router::build_router;
use product_catalog::search::engine::SearchEngine;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    tracing::info!("Starting product catalog: {:?}", config);

    // 1. Catalog (must be complete before the listener binds):
    let catalog = Arc::new(generate_catalog(config.total_products));

    // 2. Search engine:
    let window = config.window_start();
    if let Some(seed) = config.window_seed {
        tracing::info!("Search windows seeded with {}", seed);
    }
    let engine = Arc::new(SearchEngine::new(
        catalog.clone(),
        window,
        config.search_options(),
    ));

    // 3. HTTP Router:
    let app = build_router(catalog, engine, config.sample_limit);

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
