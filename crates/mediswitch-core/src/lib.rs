//! MediSwitch Core — shared error type and configuration.

pub mod config;
pub mod error;

pub use config::MediSwitchConfig;
pub use error::{Error, Result};
