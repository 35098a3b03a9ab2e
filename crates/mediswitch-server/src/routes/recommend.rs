//! Recommendation routes.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use mediswitch_resolve::Recommendation;
use serde::Deserialize;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/recommend", get(recommend_query).post(recommend_form))
}

#[derive(Deserialize)]
struct RecommendRequest {
    medicine_name: String,
}

#[derive(Deserialize)]
struct RecommendParams {
    #[serde(default)]
    name: String,
}

/// POST /api/recommend — `{"medicine_name": "..."}`.
async fn recommend_form(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendRequest>,
) -> Json<Vec<Recommendation>> {
    Json(state.engine().recommend(&req.medicine_name))
}

/// GET /api/recommend?name=...
async fn recommend_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecommendParams>,
) -> Json<Vec<Recommendation>> {
    Json(state.engine().recommend(&params.name))
}
