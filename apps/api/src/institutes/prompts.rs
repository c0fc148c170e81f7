//! Prompt construction for institute discovery.
//!
//! The prompt embeds an explicit output-shape contract so the generator's
//! answer can be sliced and parsed mechanically. Location and career strings
//! are treated as opaque content; containment of a misbehaving generator is
//! the parser's job, not the prompt's.

/// Renders the strict-JSON institute search prompt for one query.
pub fn institute_search_prompt(location: &str, careers: &[String]) -> String {
    let careers_list = careers
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You MUST respond with **valid JSON only**. NO explanation.

Task:
1. Normalize this location and return lat/lng (India focus).
2. For each given career, find nearby real institutes OR plausible ones.
3. Each institute MUST have:
   - name
   - address
   - lat
   - lng
   - distance_km
   - courses
   - description

Input:
location: "{location}"
careers: [{careers_list}]

Return JSON exactly like:

{{
  "location_resolved": "Udupi, Karnataka",
  "lat": 13.3402,
  "lng": 74.7421,
  "institutes": [
    {{
      "name": "ABC Training Center",
      "address": "XYZ Road, Udupi",
      "lat": 13.3381,
      "lng": 74.7499,
      "distance_km": 2.1,
      "courses": ["Software Engineering"],
      "description": "Short info"
    }}
  ]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_location_and_careers() {
        let prompt =
            institute_search_prompt("Udupi", &["Tailor".to_string(), "Nurse".to_string()]);
        assert!(prompt.contains(r#"location: "Udupi""#));
        assert!(prompt.contains(r#"careers: ["Tailor", "Nurse"]"#));
    }

    #[test]
    fn test_prompt_states_output_contract() {
        let prompt = institute_search_prompt("Udupi", &["Tailor".to_string()]);
        for key in [
            "location_resolved",
            "institutes",
            "name",
            "address",
            "lat",
            "lng",
            "distance_km",
            "courses",
            "description",
        ] {
            assert!(prompt.contains(key), "missing contract key {key}");
        }
        assert!(prompt.contains("valid JSON only"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let careers = vec!["Chef".to_string()];
        assert_eq!(
            institute_search_prompt("Mangalore", &careers),
            institute_search_prompt("Mangalore", &careers)
        );
    }
}
