//! MediSwitch Store — immutable in-memory catalog of item records.

pub mod catalog;
pub mod loader;
pub mod types;

pub use catalog::Catalog;
pub use types::*;
