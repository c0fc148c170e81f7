//! Classifier artifact — the serialized vectorizer, linear model, and label set.
//!
//! The artifact is a single JSON file exported at training time. Labels either
//! live inside the artifact or in a separate classes file (a plain JSON array)
//! for pipelines that went through a label encoder. Everything here is loaded
//! once at startup and shared immutably by all request handlers.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact carries no label set and no classes file exists")]
    MissingLabels,

    #[error("duplicate label {0:?} in label set")]
    DuplicateLabel(String),

    #[error("{labels} labels but {rows} coefficient rows")]
    LabelShape { labels: usize, rows: usize },

    #[error("{labels} labels but {intercepts} intercepts")]
    InterceptShape { labels: usize, intercepts: usize },

    #[error("expected {expected} features per coefficient row, row {row} has {got}")]
    FeatureShape {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Input arity the trained pipeline expects. Decided once at load time — the
/// normalizer branches on this flag instead of re-detecting per request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputShape {
    /// One merged free-text string (the default training setup).
    SingleText,
    /// A fixed column layout: text columns feed the vectorizer, numeric
    /// columns are appended raw to the feature vector in declaration order.
    MultiColumn { columns: Vec<ColumnSpec> },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    Numeric,
}

/// TF-IDF vectorizer state: a term → column map plus per-column idf weights.
#[derive(Debug, Deserialize)]
pub struct Vectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

impl Vectorizer {
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Maps raw text to an l2-normalized tf-idf row. Unknown terms are dropped.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut row = vec![0.0_f64; self.idf.len()];
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                if idx < row.len() {
                    row[idx] += 1.0;
                }
            }
        }
        for (value, idf) in row.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut row {
                *value /= norm;
            }
        }
        row
    }
}

/// Lowercased alphanumeric runs of length ≥ 2, matching the training tokenizer.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_lowercase())
        .collect()
}

/// One-vs-rest linear model: a coefficient row and intercept per label.
#[derive(Debug, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
    /// Whether decision scores may be softmaxed into a probability
    /// distribution. Uncalibrated models only support argmax.
    #[serde(default)]
    pub calibrated: bool,
}

impl LinearModel {
    /// Raw per-label decision scores for one feature row.
    pub fn decision(&self, features: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ArtifactFile {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default = "default_input_shape")]
    input: InputShape,
    vectorizer: Vectorizer,
    model: LinearModel,
}

fn default_input_shape() -> InputShape {
    InputShape::SingleText
}

/// Fully validated, immutable classifier state. Shared by all concurrent
/// readers for the lifetime of the process; there are no writers after load.
#[derive(Debug)]
pub struct ClassifierArtifact {
    pub labels: Vec<String>,
    pub input: InputShape,
    pub vectorizer: Vectorizer,
    pub model: LinearModel,
}

impl ClassifierArtifact {
    /// Loads and validates the artifact. `classes_path` is only consulted when
    /// the artifact itself carries no label set.
    pub fn load(model_path: &Path, classes_path: &Path) -> Result<Self, LoadError> {
        let file: ArtifactFile = read_json(model_path)?;

        let labels = if file.labels.is_empty() {
            if classes_path.exists() {
                read_json::<Vec<String>>(classes_path)?
            } else {
                return Err(LoadError::MissingLabels);
            }
        } else {
            file.labels
        };
        if labels.is_empty() {
            return Err(LoadError::MissingLabels);
        }

        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(LoadError::DuplicateLabel(label.clone()));
            }
        }

        if file.model.coefficients.len() != labels.len() {
            return Err(LoadError::LabelShape {
                labels: labels.len(),
                rows: file.model.coefficients.len(),
            });
        }
        if file.model.intercepts.len() != labels.len() {
            return Err(LoadError::InterceptShape {
                labels: labels.len(),
                intercepts: file.model.intercepts.len(),
            });
        }

        let expected = file.vectorizer.n_features() + numeric_columns(&file.input);
        for (row, coefs) in file.model.coefficients.iter().enumerate() {
            if coefs.len() != expected {
                return Err(LoadError::FeatureShape {
                    row,
                    expected,
                    got: coefs.len(),
                });
            }
        }

        Ok(ClassifierArtifact {
            labels,
            input: file.input,
            vectorizer: file.vectorizer,
            model: file.model,
        })
    }

    pub fn n_features(&self) -> usize {
        self.vectorizer.n_features() + numeric_columns(&self.input)
    }
}

fn numeric_columns(shape: &InputShape) -> usize {
    match shape {
        InputShape::SingleText => 0,
        InputShape::MultiColumn { columns } => columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Numeric)
            .count(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_short_tokens() {
        let tokens = tokenize("I love Robotics & AI-labs!");
        assert_eq!(tokens, vec!["love", "robotics", "ai", "labs"]);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer = Vectorizer {
            vocabulary: HashMap::from([("sewing".to_string(), 0), ("fabric".to_string(), 1)]),
            idf: vec![1.0, 2.0],
        };
        let row = vectorizer.transform("sewing fabric fabric");
        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        assert!(row[1] > row[0]);
    }

    #[test]
    fn test_transform_unknown_terms_yield_zero_row() {
        let vectorizer = Vectorizer {
            vocabulary: HashMap::from([("sewing".to_string(), 0)]),
            idf: vec![1.0],
        };
        let row = vectorizer.transform("quantum chromodynamics");
        assert_eq!(row, vec![0.0]);
    }

    #[test]
    fn test_decision_is_affine() {
        let model = LinearModel {
            coefficients: vec![vec![1.0, 0.0], vec![0.0, 2.0]],
            intercepts: vec![0.5, -0.5],
            calibrated: true,
        };
        let scores = model.decision(&[1.0, 1.0]);
        assert_eq!(scores, vec![1.5, 1.5]);
    }
}
