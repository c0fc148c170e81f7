//! Input normalization — merges heterogeneous request fields into the
//! representation the loaded classifier declares it expects.
//!
//! Never validates "at least one field present"; that rule belongs to the
//! HTTP boundary. Always produces a value, even for an all-empty query.

use crate::classifier::artifact::{ColumnKind, InputShape};

/// The canonical, never-null request payload. Fields may be empty.
#[derive(Debug, Clone, Default)]
pub struct CanonicalQuery {
    pub text: String,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub education: String,
    pub stream_code: String,
    pub gender: String,
    pub age: i64,
}

/// One cell of a multi-column feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Text(String),
    Numeric(f64),
}

/// Classifier-ready input, matching the artifact's declared arity.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedInput {
    MergedText(String),
    /// Cells aligned one-to-one with the artifact's column declaration.
    FeatureRow(Vec<FeatureValue>),
}

pub fn normalize(query: &CanonicalQuery, shape: &InputShape) -> NormalizedInput {
    match shape {
        InputShape::SingleText => NormalizedInput::MergedText(merged_text(query)),
        InputShape::MultiColumn { columns } => NormalizedInput::FeatureRow(
            columns
                .iter()
                .map(|col| match col.kind {
                    ColumnKind::Text => FeatureValue::Text(text_column(query, &col.name)),
                    ColumnKind::Numeric => FeatureValue::Numeric(numeric_column(query, &col.name)),
                })
                .collect(),
        ),
    }
}

/// Free text, then interests, then skills, space-joined in that fixed order.
fn merged_text(query: &CanonicalQuery) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if !query.text.trim().is_empty() {
        parts.push(query.text.trim());
    }
    parts.extend(query.interests.iter().map(|s| s.as_str()).filter(|s| !s.trim().is_empty()));
    parts.extend(query.skills.iter().map(|s| s.as_str()).filter(|s| !s.trim().is_empty()));
    parts.join(" ")
}

/// String columns default to "" for names the query does not carry.
fn text_column(query: &CanonicalQuery, name: &str) -> String {
    match name {
        "text" => query.text.clone(),
        "interests" => query.interests.join(" "),
        "skills" => query.skills.join(" "),
        "education" => query.education.clone(),
        "stream_code" => query.stream_code.clone(),
        "gender" => query.gender.clone(),
        _ => String::new(),
    }
}

/// Numeric columns default to 0 for names the query does not carry.
fn numeric_column(query: &CanonicalQuery, name: &str) -> f64 {
    match name {
        "age" => query.age as f64,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::artifact::ColumnSpec;

    fn sample_query() -> CanonicalQuery {
        CanonicalQuery {
            text: "I enjoy stitching clothes".to_string(),
            interests: vec!["fashion".to_string(), "design".to_string()],
            skills: vec!["sewing".to_string()],
            education: "10th".to_string(),
            stream_code: "arts".to_string(),
            gender: "F".to_string(),
            age: 17,
        }
    }

    #[test]
    fn test_merged_text_fixed_order() {
        let input = normalize(&sample_query(), &InputShape::SingleText);
        assert_eq!(
            input,
            NormalizedInput::MergedText(
                "I enjoy stitching clothes fashion design sewing".to_string()
            )
        );
    }

    #[test]
    fn test_merged_text_empty_query_is_empty_string() {
        let input = normalize(&CanonicalQuery::default(), &InputShape::SingleText);
        assert_eq!(input, NormalizedInput::MergedText(String::new()));
    }

    #[test]
    fn test_merged_text_skips_blank_fragments() {
        let query = CanonicalQuery {
            interests: vec!["".to_string(), "farming".to_string()],
            ..CanonicalQuery::default()
        };
        let input = normalize(&query, &InputShape::SingleText);
        assert_eq!(input, NormalizedInput::MergedText("farming".to_string()));
    }

    #[test]
    fn test_feature_row_follows_column_order_with_defaults() {
        let shape = InputShape::MultiColumn {
            columns: vec![
                ColumnSpec {
                    name: "text".to_string(),
                    kind: ColumnKind::Text,
                },
                ColumnSpec {
                    name: "age".to_string(),
                    kind: ColumnKind::Numeric,
                },
                ColumnSpec {
                    name: "nonexistent".to_string(),
                    kind: ColumnKind::Text,
                },
                ColumnSpec {
                    name: "salary".to_string(),
                    kind: ColumnKind::Numeric,
                },
            ],
        };
        let input = normalize(&sample_query(), &shape);
        assert_eq!(
            input,
            NormalizedInput::FeatureRow(vec![
                FeatureValue::Text("I enjoy stitching clothes".to_string()),
                FeatureValue::Numeric(17.0),
                FeatureValue::Text(String::new()),
                FeatureValue::Numeric(0.0),
            ])
        );
    }
}
