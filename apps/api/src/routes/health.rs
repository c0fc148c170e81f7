use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Status plus readiness: a service with a failed model load keeps answering
/// here so orchestration can tell "up but degraded" from "down".
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "kanasu-api",
        "model_loaded": state.classifier.is_some(),
        "cluster_entries": state.clusters.len(),
    }))
}
