//! Axum route handler for institute search.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::institutes::{search_institutes, InstituteSearchResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InstituteRequest {
    pub location: String,
    #[serde(default)]
    pub careers: Vec<String>,
    #[serde(default = "default_max_per_career")]
    pub max_per_career: usize,
}

fn default_max_per_career() -> usize {
    6
}

/// POST /institutions
///
/// Validates the query shape, then delegates to the orchestrator. Everything
/// past validation degrades instead of erroring, so this handler only fails
/// on malformed input.
pub async fn handle_institutions(
    State(state): State<AppState>,
    Json(request): Json<InstituteRequest>,
) -> Result<Json<InstituteSearchResult>, AppError> {
    let location = request.location.trim();
    if location.is_empty() {
        return Err(AppError::Validation("location cannot be empty".to_string()));
    }
    if request.careers.is_empty() {
        return Err(AppError::Validation(
            "Provide at least one career to search for".to_string(),
        ));
    }
    if request.max_per_career == 0 {
        return Err(AppError::Validation(
            "max_per_career must be positive".to_string(),
        ));
    }

    let result = search_institutes(
        state.gateway.as_ref(),
        &state.clusters,
        location,
        &request.careers,
        request.max_per_career,
    )
    .await;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_max_per_career() {
        let request: InstituteRequest =
            serde_json::from_str(r#"{"location": "Udupi", "careers": ["tailor"]}"#).unwrap();
        assert_eq!(request.max_per_career, 6);
        assert_eq!(request.careers, vec!["tailor".to_string()]);
    }
}
