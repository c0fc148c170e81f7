//! Axum route handler for career prediction.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::classifier::normalize::{normalize, CanonicalQuery};
use crate::errors::AppError;
use crate::state::AppState;

const TOP_K: usize = 3;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub stream_code: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl PredictRequest {
    fn is_blank(&self) -> bool {
        self.text.as_deref().map_or(true, |t| t.trim().is_empty())
            && self.interests.as_deref().map_or(true, |i| i.is_empty())
            && self.skills.as_deref().map_or(true, |s| s.is_empty())
    }

    fn into_query(self) -> CanonicalQuery {
        CanonicalQuery {
            text: self.text.unwrap_or_default(),
            interests: self.interests.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            education: self.education.unwrap_or_default(),
            stream_code: self.stream_code.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
        }
    }
}

/// One ranked career, resolved through the cluster map.
#[derive(Debug, Serialize)]
pub struct PredictionItem {
    pub label: String,
    pub label_code: String,
    pub probability: f64,
    pub cluster: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub top_3: Vec<PredictionItem>,
}

/// POST /predict
///
/// Boundary rule lives here, not in the normalizer: at least one of text,
/// interests, or skills must be present. Answers 503 while the classifier
/// artifact is unavailable.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    if request.is_blank() {
        return Err(AppError::Validation(
            "Provide at least one of: text, interests, skills".to_string(),
        ));
    }

    let Some(classifier) = &state.classifier else {
        return Err(AppError::ModelUnavailable);
    };

    let query = request.into_query();
    let input = normalize(&query, classifier.input_shape());
    let ranked = classifier.predict_top_k(&input, TOP_K)?;

    let top_3 = ranked
        .into_iter()
        .map(|prediction| {
            let entry = state.clusters.get(&prediction.label);
            PredictionItem {
                label: state.clusters.display_title(&prediction.label),
                label_code: prediction.label,
                probability: round4(prediction.probability),
                cluster: entry.map(|e| e.cluster_label.clone()),
            }
        })
        .collect();

    Ok(Json(PredictResponse { top_3 }))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
