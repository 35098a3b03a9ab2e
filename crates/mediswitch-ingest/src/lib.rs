//! MediSwitch Ingest — form classification, combined feature text, tokenization.

pub mod extract;

pub use extract::combine::{build_combined_text, FeatureSource};
pub use extract::forms::{classify, distinct_forms, FormTag, FORM_KEYWORDS};
pub use extract::tokenize::tokenize;
