#![allow(dead_code)]

//! Career classifier — owns the trained artifact and produces ranked
//! class probabilities for normalized input.

pub mod artifact;
pub mod handlers;
pub mod normalize;

use std::cmp::Ordering;
use std::path::Path;

use thiserror::Error;
use tracing::info;

pub use artifact::{ClassifierArtifact, InputShape, LoadError};
pub use normalize::{CanonicalQuery, FeatureValue, NormalizedInput};

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("input shape mismatch: artifact expects {expected}, got {got}")]
    ShapeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("feature row has {got} cells, artifact declares {expected} columns")]
    RowWidth { expected: usize, got: usize },
}

/// One ranked prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub probability: f64,
}

/// Application-lifetime inference context. Constructed once at startup from
/// the artifact files and then only read; load failure keeps the service up
/// but marks the classifier unavailable.
#[derive(Debug)]
pub struct ClassifierService {
    artifact: ClassifierArtifact,
}

impl ClassifierService {
    pub fn load(model_path: &Path, classes_path: &Path) -> Result<Self, LoadError> {
        let artifact = ClassifierArtifact::load(model_path, classes_path)?;
        info!(
            labels = artifact.labels.len(),
            features = artifact.n_features(),
            calibrated = artifact.model.calibrated,
            "classifier artifact loaded"
        );
        Ok(ClassifierService { artifact })
    }

    pub fn from_artifact(artifact: ClassifierArtifact) -> Self {
        ClassifierService { artifact }
    }

    pub fn input_shape(&self) -> &InputShape {
        &self.artifact.input
    }

    pub fn labels(&self) -> &[String] {
        &self.artifact.labels
    }

    /// Ranks the label set for one input.
    ///
    /// Calibrated models yield a softmax distribution and the top
    /// `k.clamp(1, |labels|)` entries, sorted by probability descending with
    /// label-set order breaking ties. Uncalibrated models degenerate to the
    /// single argmax label at probability 1.0.
    pub fn predict_top_k(
        &self,
        input: &NormalizedInput,
        k: usize,
    ) -> Result<Vec<Prediction>, InferenceError> {
        let features = self.features_for(input)?;
        let scores = self.artifact.model.decision(&features);

        if !self.artifact.model.calibrated {
            let best = argmax(&scores);
            return Ok(vec![Prediction {
                label: self.artifact.labels[best].clone(),
                probability: 1.0,
            }]);
        }

        let probs = softmax(&scores);
        let mut order: Vec<usize> = (0..probs.len()).collect();
        // Stable sort: equal probabilities keep label-set order.
        order.sort_by(|&a, &b| probs[b].partial_cmp(&probs[a]).unwrap_or(Ordering::Equal));

        let k = k.clamp(1, self.artifact.labels.len());
        Ok(order
            .into_iter()
            .take(k)
            .map(|i| Prediction {
                label: self.artifact.labels[i].clone(),
                probability: probs[i],
            })
            .collect())
    }

    /// Flattens normalized input into the model's feature space, checking the
    /// arity against the artifact's declared shape.
    fn features_for(&self, input: &NormalizedInput) -> Result<Vec<f64>, InferenceError> {
        match (input, &self.artifact.input) {
            (NormalizedInput::MergedText(text), InputShape::SingleText) => {
                Ok(self.artifact.vectorizer.transform(text))
            }
            (NormalizedInput::FeatureRow(row), InputShape::MultiColumn { columns }) => {
                if row.len() != columns.len() {
                    return Err(InferenceError::RowWidth {
                        expected: columns.len(),
                        got: row.len(),
                    });
                }
                let text = row
                    .iter()
                    .filter_map(|cell| match cell {
                        FeatureValue::Text(t) => Some(t.as_str()),
                        FeatureValue::Numeric(_) => None,
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                let mut features = self.artifact.vectorizer.transform(&text);
                features.extend(row.iter().filter_map(|cell| match cell {
                    FeatureValue::Numeric(n) => Some(*n),
                    FeatureValue::Text(_) => None,
                }));
                Ok(features)
            }
            (NormalizedInput::MergedText(_), InputShape::MultiColumn { .. }) => {
                Err(InferenceError::ShapeMismatch {
                    expected: "a feature row",
                    got: "merged text",
                })
            }
            (NormalizedInput::FeatureRow(_), InputShape::SingleText) => {
                Err(InferenceError::ShapeMismatch {
                    expected: "merged text",
                    got: "a feature row",
                })
            }
        }
    }
}

fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, score) in scores.iter().enumerate() {
        if *score > scores[best] {
            best = i;
        }
    }
    best
}

/// Numerically stable softmax.
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::artifact::{LinearModel, Vectorizer};
    use super::*;
    use std::collections::HashMap;

    /// Three labels over a two-term vocabulary. "sewing" pulls towards tailor,
    /// "injection" towards nurse; farmer only wins on the intercept.
    fn service(calibrated: bool) -> ClassifierService {
        let artifact = ClassifierArtifact {
            labels: vec![
                "tailor".to_string(),
                "nurse".to_string(),
                "organic_farmer".to_string(),
            ],
            input: InputShape::SingleText,
            vectorizer: Vectorizer {
                vocabulary: HashMap::from([
                    ("sewing".to_string(), 0),
                    ("injection".to_string(), 1),
                ]),
                idf: vec![1.0, 1.0],
            },
            model: LinearModel {
                coefficients: vec![vec![2.0, 0.0], vec![0.0, 2.0], vec![0.0, 0.0]],
                intercepts: vec![0.0, 0.0, 0.1],
                calibrated,
            },
        };
        ClassifierService::from_artifact(artifact)
    }

    fn text(s: &str) -> NormalizedInput {
        NormalizedInput::MergedText(s.to_string())
    }

    #[test]
    fn test_top_k_returns_exactly_k_distinct_in_label_set() {
        let svc = service(true);
        for k in 1..=3 {
            let top = svc.predict_top_k(&text("sewing"), k).unwrap();
            assert_eq!(top.len(), k);
            let mut seen: Vec<&str> = top.iter().map(|p| p.label.as_str()).collect();
            seen.dedup();
            assert_eq!(seen.len(), k);
            for p in &top {
                assert!(svc.labels().contains(&p.label));
            }
        }
    }

    #[test]
    fn test_top_k_probabilities_non_increasing() {
        let svc = service(true);
        let top = svc.predict_top_k(&text("sewing sewing injection"), 3).unwrap();
        for pair in top.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
        assert_eq!(top[0].label, "tailor");
    }

    #[test]
    fn test_calibrated_distribution_sums_to_one() {
        let svc = service(true);
        let top = svc.predict_top_k(&text("sewing injection"), 3).unwrap();
        let sum: f64 = top.iter().map(|p| p.probability).sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_k_is_clamped_to_label_set() {
        let svc = service(true);
        assert_eq!(svc.predict_top_k(&text("sewing"), 0).unwrap().len(), 1);
        assert_eq!(svc.predict_top_k(&text("sewing"), 99).unwrap().len(), 3);
    }

    #[test]
    fn test_ties_break_by_label_set_order() {
        // Empty text scores tailor and nurse identically; tailor is declared
        // first so it must rank ahead.
        let svc = service(true);
        let top = svc.predict_top_k(&text(""), 3).unwrap();
        assert_eq!(top[0].label, "organic_farmer"); // intercept 0.1 wins
        assert_eq!(top[1].label, "tailor");
        assert_eq!(top[2].label, "nurse");
    }

    #[test]
    fn test_uncalibrated_returns_single_label_at_one() {
        let svc = service(false);
        let top = svc.predict_top_k(&text("injection"), 3).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].label, "nurse");
        assert_eq!(top[0].probability, 1.0);
    }

    #[test]
    fn test_shape_mismatch_raises_inference_error() {
        let svc = service(true);
        let err = svc
            .predict_top_k(&NormalizedInput::FeatureRow(vec![]), 3)
            .unwrap_err();
        assert!(matches!(err, InferenceError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_softmax_is_stable_for_large_scores() {
        let probs = softmax(&[1000.0, 999.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}
