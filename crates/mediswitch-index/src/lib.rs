//! MediSwitch Index — TF-IDF vectors and the pairwise cosine similarity matrix.
//!
//! The index is built once from the combined text of every catalog item and
//! is read-only afterwards. Any catalog change means building a new index.

pub mod similarity;
pub mod tfidf;

pub use similarity::SimilarityIndex;
pub use tfidf::{SparseVector, TfIdfModel};
