//! In-Memory Product Catalog Library
//!
//! Core modules of the catalog service. The binary (`main.rs`) generates the catalog once,
//! then serves it over HTTP.
//!
//! ## Architecture Modules
//! - **`catalog`**: Deterministic generation of the synthetic product dataset.
//! - **`storage`**: The concurrent product store, its ID sequence, and the lookup and
//!   sampling endpoints.
//! - **`search`**: Bounded-window substring search with pluggable window start strategies.
//! - **`config`**: Command-line and environment configuration.
//! - **`router`**: Assembles the Axum router from the module handlers.

pub mod catalog;
pub mod config;
pub mod router;
pub mod search;
pub mod storage;
