//! Process configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Number of recommendations returned per query unless overridden.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Cap on name suggestions returned per prefix query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 20;

const DEFAULT_PORT: u16 = 3003;
const DEFAULT_CATALOG: &str = "data/Medicine_Details.csv";

/// Top-level MediSwitch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediSwitchConfig {
    /// HTTP server port.
    pub port: u16,
    /// Path of the catalog CSV loaded at startup and on reload.
    pub catalog_path: PathBuf,
    /// Upper bound on recommendations per query.
    pub max_results: usize,
    /// Upper bound on name suggestions per query.
    pub max_suggestions: usize,
}

impl Default for MediSwitchConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            max_results: DEFAULT_MAX_RESULTS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl MediSwitchConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable numbers fall back to their defaults; a zero result bound
    /// is rejected since it would make every query empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let catalog_path = lookup("MEDISWITCH_CATALOG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        let max_results = lookup("MEDISWITCH_MAX_RESULTS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_results);
        if max_results == 0 {
            return Err(Error::Config(
                "MEDISWITCH_MAX_RESULTS must be at least 1".to_string(),
            ));
        }

        let max_suggestions = lookup("MEDISWITCH_MAX_SUGGESTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_suggestions);

        if lookup("MEDISWITCH_CATALOG").is_none() {
            tracing::debug!("MEDISWITCH_CATALOG unset, using {}", catalog_path.display());
        }

        Ok(Self {
            port,
            catalog_path,
            max_results,
            max_suggestions,
        })
    }
}
