//! Shared application state.

use std::sync::Arc;

use mediswitch_core::{MediSwitchConfig, Result};
use mediswitch_resolve::RecommendationEngine;
use mediswitch_store::Catalog;
use parking_lot::RwLock;
use tracing::info;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: MediSwitchConfig,
    /// Current engine. Replaced wholesale on reload, never mutated in place.
    engine: RwLock<Arc<RecommendationEngine>>,
}

impl AppState {
    pub fn new(config: MediSwitchConfig, engine: RecommendationEngine) -> Self {
        Self {
            config,
            engine: RwLock::new(Arc::new(engine)),
        }
    }

    /// Snapshot of the current engine. Queries run against the snapshot, so a
    /// concurrent reload never affects a request already in flight.
    pub fn engine(&self) -> Arc<RecommendationEngine> {
        self.engine.read().clone()
    }

    /// Reload the configured catalog and swap in a freshly built engine.
    ///
    /// The old engine stays active if loading or building fails.
    pub fn reload(&self) -> Result<usize> {
        let catalog = Catalog::load_csv(&self.config.catalog_path)?;
        let engine = build_engine(&self.config, catalog)?;
        let items = engine.catalog().len();
        *self.engine.write() = Arc::new(engine);
        info!("Catalog reloaded: {} items", items);
        Ok(items)
    }
}

/// Build an engine over `catalog` with the configured result bound.
pub fn build_engine(config: &MediSwitchConfig, catalog: Catalog) -> Result<RecommendationEngine> {
    Ok(RecommendationEngine::build(catalog)?.with_max_results(config.max_results))
}
