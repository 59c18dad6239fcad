//! Service Configuration
//!
//! Command-line flags, each with an environment-variable fallback.

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::search::types::{DEFAULT_CHECK_LIMIT, DEFAULT_MAX_RESULTS, SearchOptions};
use crate::search::window::{ClockWindow, SeededWindow, WindowStart};

pub const DEFAULT_TOTAL_PRODUCTS: usize = 100_000;
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "product-catalog",
    about = "In-memory product catalog with bounded-window search"
)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "CATALOG_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Number of products generated at startup.
    #[arg(
        long,
        env = "CATALOG_TOTAL_PRODUCTS",
        default_value_t = DEFAULT_TOTAL_PRODUCTS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub total_products: usize,

    /// Positions scanned per search.
    #[arg(
        long,
        env = "CATALOG_CHECK_LIMIT",
        default_value_t = DEFAULT_CHECK_LIMIT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub check_limit: usize,

    /// Products returned per search.
    #[arg(long, env = "CATALOG_MAX_RESULTS", default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Products returned by the sample listing.
    #[arg(long, env = "CATALOG_SAMPLE_LIMIT", default_value_t = DEFAULT_SAMPLE_LIMIT)]
    pub sample_limit: usize,

    /// Seed for reproducible search windows. Without it windows follow the wall clock.
    #[arg(long, env = "CATALOG_WINDOW_SEED")]
    pub window_seed: Option<u64>,
}

impl Config {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            check_limit: self.check_limit,
            max_results: self.max_results,
        }
    }

    pub fn window_start(&self) -> Arc<dyn WindowStart> {
        match self.window_seed {
            Some(seed) => Arc::new(SeededWindow::new(seed)),
            None => Arc::new(ClockWindow),
        }
    }
}
