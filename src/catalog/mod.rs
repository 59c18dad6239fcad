//! Catalog Generation Module
//!
//! Produces the synthetic dataset the service is built around.
//!
//! ## Overview
//! Every product is derived from its ID alone: the brand and category rotate through two
//! fixed ten-element lists and the name combines brand and ID. Generation is deterministic,
//! so two catalogs of the same size are identical.
//!
//! ## Submodules
//! - **`generator`**: Populates a `Catalog` (store + ID sequence) at startup.
//! - **`types`**: The `Product` record and the fixed brand/category lists.

pub mod generator;
pub mod types;
