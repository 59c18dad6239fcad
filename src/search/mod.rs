//! Search Service Module
//!
//! Bounded-window substring search over the catalog.
//!
//! ## Overview
//! A search never walks the whole dataset. It picks a start index in the ID sequence,
//! visits a fixed number of consecutive positions (wrapping at the end), and matches the
//! normalized query against each product's name and category. The cost of a search is
//! therefore constant regardless of catalog size or query selectivity.
//!
//! ## Submodules
//! - **`engine`**: The windowed scan and the `SearchEngine` that owns its configuration.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`query`**: Query normalization and the match predicate.
//! - **`types`**: Search options, outcomes and DTOs.
//! - **`window`**: Pluggable strategies for choosing the window start.

pub mod engine;
pub mod handlers;
pub mod query;
pub mod types;
pub mod window;
