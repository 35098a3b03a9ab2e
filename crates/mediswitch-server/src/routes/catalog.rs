//! Catalog routes — suggestions, item detail, classification, reload.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use mediswitch_core::Error;
use mediswitch_ingest::FormTag;
use mediswitch_resolve::RecommendationEngine;
use mediswitch_store::ItemRecord;
use serde::Deserialize;
use tracing::warn;

use super::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/suggestions", get(suggestions))
        .route("/medicines/{name}", get(medicine_detail))
        .route("/classify", get(classify))
        .route("/catalog/reload", post(reload))
}

#[derive(Deserialize)]
struct SuggestionParams {
    #[serde(default)]
    query: String,
}

/// GET /api/suggestions?query=... — names containing the query.
async fn suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestionParams>,
) -> Json<Vec<String>> {
    let engine = state.engine();
    let names = engine
        .catalog()
        .suggestions(&params.query, state.config.max_suggestions)
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(names)
}

/// GET /api/medicines/{name} — first item with that name.
async fn medicine_detail(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ItemRecord>, ApiError> {
    let engine = state.engine();
    engine
        .catalog()
        .find(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("medicine '{}'", name)).into())
}

#[derive(Deserialize)]
struct ClassifyParams {
    #[serde(default)]
    name: String,
}

/// GET /api/classify?name=... — form tag or null.
async fn classify(Query(params): Query<ClassifyParams>) -> Json<serde_json::Value> {
    let form: Option<FormTag> = RecommendationEngine::classify(&params.name);
    Json(serde_json::json!({ "name": params.name, "form": form }))
}

/// POST /api/catalog/reload — rebuild the engine from the configured catalog.
async fn reload(State(state): State<Arc<AppState>>) -> Result<Json<serde_json::Value>, ApiError> {
    let task_state = state.clone();
    let outcome = tokio::task::spawn_blocking(move || task_state.reload())
        .await
        .map_err(|e| Error::Internal(format!("Reload task failed: {}", e)))?;

    match outcome {
        Ok(items) => Ok(Json(serde_json::json!({ "status": "reloaded", "items": items }))),
        Err(e) => {
            warn!("Catalog reload rejected, keeping current engine: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::*;
    use axum::http::StatusCode;
    use std::io::Write;

    #[tokio::test]
    async fn test_suggestions() {
        let app = test_app();
        let (status, json) = get(&app.router, "/api/suggestions?query=CROCIN").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!(["Crocin Tablet", "Crocin Syrup"]));
    }

    #[tokio::test]
    async fn test_medicine_detail() {
        let app = test_app();
        let (status, json) = get(&app.router, "/api/medicines/asthalin%20inhaler").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Asthalin Inhaler");
        assert_eq!(json["company"], "Cipla");
        assert_eq!(json["composition"], "Salbutamol");
    }

    #[tokio::test]
    async fn test_medicine_detail_not_found() {
        let app = test_app();
        let (status, json) = get(&app.router, "/api/medicines/Nothing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("Nothing"));
    }

    #[tokio::test]
    async fn test_classify() {
        let app = test_app();
        let (_, json) = get(&app.router, "/api/classify?name=Volini%20Gel").await;
        assert_eq!(json["form"], "Gel");
        let (_, json) = get(&app.router, "/api/classify?name=Dolo%20650").await;
        assert!(json["form"].is_null());
    }

    #[tokio::test]
    async fn test_reload_swaps_engine() {
        let mut app = test_app();
        let before = app.state.engine();
        assert_eq!(before.catalog().len(), 5);

        writeln!(
            app.catalog_file,
            "Dolo Syrup,Paracetamol (650mg),Fever,Nausea,https://img/dolo-syrup.jpg,Micro Labs,30,40,30"
        )
        .unwrap();
        app.catalog_file.flush().unwrap();

        let (status, json) =
            post_json(&app.router, "/api/catalog/reload", serde_json::json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"], 6);
        assert_eq!(app.state.engine().catalog().len(), 6);
        // Snapshot taken before the reload is untouched.
        assert_eq!(before.catalog().len(), 5);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_engine() {
        let app = test_app();
        std::fs::write(app.catalog_file.path(), "Composition,Uses\nA,B\n").unwrap();

        let (status, json) =
            post_json(&app.router, "/api/catalog/reload", serde_json::json!({})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("Medicine Name"));
        assert_eq!(app.state.engine().catalog().len(), 5);
    }
}
