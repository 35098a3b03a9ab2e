//! Per-item feature extraction.
//!
//! Everything here is a pure function of item text: the form tag derived
//! from a name, the combined text fed to the vectorizer, and the tokenizer
//! the vectorizer uses.

pub mod combine;
pub mod forms;
pub mod stopwords;
pub mod tokenize;
