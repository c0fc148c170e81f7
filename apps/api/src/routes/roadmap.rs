use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub career: Option<String>,
}

/// POST /roadmap
/// Deterministic stub roadmap. TODO: generate per-career roadmaps through the
/// gateway once the prompt contract is settled.
pub async fn handle_roadmap(Json(request): Json<RoadmapRequest>) -> Json<Value> {
    Json(json!({
        "career": request.career.unwrap_or_else(|| "Unknown".to_string()),
        "summary": "This is a stubbed roadmap. Replace with generator output.",
        "steps": [
            {"step": 1, "title": "Learn basics", "duration_months": 3, "details": "Do X, Y, Z"},
            {"step": 2, "title": "Build projects", "duration_months": 6, "details": "Build A, B"}
        ]
    }))
}
