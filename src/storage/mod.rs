//! Product Storage Module
//!
//! Holds the generated catalog in memory and serves point lookups and sampling.
//!
//! ## Core Concepts
//! - **Store**: A sharded concurrent map (`DashMap`) from product ID to record. Written once
//!   during generation, read-only afterwards.
//! - **ID Sequence**: The ordered list of every valid ID, used for deterministic circular
//!   iteration by the search engine.
//! - **Catalog**: Owns both and is shared across handlers behind an `Arc`.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod protocol;
