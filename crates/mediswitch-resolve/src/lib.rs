//! Recommenders — similarity-ranked, filter-gated item recommendations.
//!
//! `RecommendationEngine` bundles the catalog with its similarity index.
//! It is built once and shared read-only across queries.

pub mod engine;
pub mod types;

pub use engine::RecommendationEngine;
pub use types::*;
