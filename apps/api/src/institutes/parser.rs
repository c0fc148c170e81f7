//! Response parsing — digs a JSON object out of free-form generator text.
//!
//! Primary extraction is a balanced-token scan from the first `{`, aware of
//! strings and escapes, so literal braces inside descriptions cannot truncate
//! the object. The simple first-`{`/last-`}` slice stays as a tested fallback
//! for the rare payload the scanner cannot close (e.g. truncated output).
//! Per-institute field normalization happens downstream in the geo enricher;
//! this module only guarantees the container shape.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("generator output is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("generator output is not a JSON object")]
    NotObject,
}

/// The container extracted from one generator response. Institute records are
/// kept as raw JSON values for the enricher to normalize.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInstituteSet {
    pub location_resolved: String,
    pub origin_lat: Option<f64>,
    pub origin_lng: Option<f64>,
    pub institutes: Vec<Value>,
}

/// Parses raw generator text, defaulting `institutes` to an empty list and
/// `location_resolved` to the requested location.
pub fn parse_institute_payload(
    raw: &str,
    requested_location: &str,
) -> Result<ParsedInstituteSet, ParseError> {
    let value = extract_json(raw)?;
    let obj = value.as_object().ok_or(ParseError::NotObject)?;

    Ok(ParsedInstituteSet {
        location_resolved: obj
            .get("location_resolved")
            .and_then(Value::as_str)
            .unwrap_or(requested_location)
            .to_string(),
        origin_lat: obj.get("lat").and_then(Value::as_f64),
        origin_lng: obj.get("lng").and_then(Value::as_f64),
        institutes: obj
            .get("institutes")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
    })
}

/// Locates and parses the first JSON object embedded in `text`. Text without
/// any `{` is parsed whole (and fails unless it is already JSON).
pub fn extract_json(text: &str) -> Result<Value, ParseError> {
    let text = text.trim();
    let Some(start) = text.find('{') else {
        return serde_json::from_str(text).map_err(ParseError::Json);
    };

    if let Some(len) = balanced_object_len(&text[start..]) {
        if let Ok(value) = serde_json::from_str(&text[start..start + len]) {
            return Ok(value);
        }
    }

    // Fallback heuristic: slice from the first `{` to the last `}`.
    let end = match text.rfind('}') {
        Some(i) if i >= start => i + 1,
        _ => text.len(),
    };
    serde_json::from_str(&text[start..end]).map_err(ParseError::Json)
}

/// Byte length of the brace-balanced object at the start of `s`, honoring
/// string literals and backslash escapes. `None` if the object never closes.
fn balanced_object_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, byte) in s.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_object_after_preamble() {
        let parsed = parse_institute_payload(r#"Sure! {"institutes": []}"#, "Udupi").unwrap();
        assert_eq!(parsed.institutes, Vec::<Value>::new());
        assert_eq!(parsed.location_resolved, "Udupi");
    }

    #[test]
    fn test_no_brace_is_a_parse_error() {
        let err = parse_institute_payload("I could not find any institutes.", "Udupi").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_garbage_between_braces_is_a_parse_error() {
        assert!(parse_institute_payload("{not json at all}", "Udupi").is_err());
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        let err = parse_institute_payload("[1, 2, 3]", "Udupi").unwrap_err();
        assert!(matches!(err, ParseError::NotObject));
    }

    #[test]
    fn test_defaults_applied_for_missing_keys() {
        let parsed = parse_institute_payload(r#"{"lat": 13.34, "lng": 74.74}"#, "Udupi").unwrap();
        assert_eq!(parsed.location_resolved, "Udupi");
        assert_eq!(parsed.origin_lat, Some(13.34));
        assert_eq!(parsed.origin_lng, Some(74.74));
        assert!(parsed.institutes.is_empty());
    }

    #[test]
    fn test_location_resolved_passes_through() {
        let parsed = parse_institute_payload(
            r#"{"location_resolved": "Udupi, Karnataka", "institutes": []}"#,
            "udupi",
        )
        .unwrap();
        assert_eq!(parsed.location_resolved, "Udupi, Karnataka");
    }

    #[test]
    fn test_balanced_scan_survives_braces_in_strings() {
        // A naive last-`}` slice would stop at the brace inside the
        // description; the balanced scan must not.
        let raw = r#"Here you go:
            {"institutes": [{"name": "A", "description": "offers {weekend} batches"}]}
            Hope that helps!"#;
        let parsed = parse_institute_payload(raw, "Udupi").unwrap();
        assert_eq!(parsed.institutes.len(), 1);
        assert_eq!(
            parsed.institutes[0],
            json!({"name": "A", "description": "offers {weekend} batches"})
        );
    }

    #[test]
    fn test_trailing_prose_after_object_is_ignored() {
        let value = extract_json(r#"{"institutes": []} trailing notes"#).unwrap();
        assert_eq!(value, json!({"institutes": []}));
    }

    #[test]
    fn test_unclosed_object_falls_through_to_slice_then_errors() {
        let err = extract_json(r#"{"institutes": ["#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_balanced_object_len_tracks_escapes() {
        let s = r#"{"a": "quote \" and { brace"}"#;
        assert_eq!(balanced_object_len(s), Some(s.len()));
    }

    #[test]
    fn test_unclosed_object_reports_none() {
        assert_eq!(balanced_object_len(r#"{"a": 1"#), None);
    }
}
