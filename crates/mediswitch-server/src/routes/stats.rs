//! Catalog statistics route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use mediswitch_store::CatalogStats;
use serde::Serialize;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    #[serde(flatten)]
    catalog: CatalogStats,
    vocabulary_size: usize,
    max_results: usize,
}

/// GET /api/stats — catalog size, companies, average rating, form tags.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let engine = state.engine();
    Json(StatsResponse {
        catalog: engine.catalog().stats(),
        vocabulary_size: engine.index().vocabulary_size(),
        max_results: engine.max_results(),
    })
}
