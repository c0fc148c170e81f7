//! Fallback synthesis — deterministic placeholder institutes for when the
//! generator is unreachable or returns unusable output.
//!
//! This is the resilience floor of institute search: total external failure
//! still yields a shape-correct, non-empty response with one entry per
//! requested career.

use crate::institutes::geo::maps_search_url;
use crate::institutes::{Institute, InstituteSearchResult};

pub fn synthesize(location: &str, titles: &[String]) -> InstituteSearchResult {
    let institutes = titles
        .iter()
        .map(|title| Institute {
            name: format!("{title} Center - {location}"),
            address: format!("Near {location}"),
            lat: None,
            lng: None,
            distance_km: None,
            maps_url: maps_search_url(&format!("{title} {location}")),
            courses: vec![title.clone()],
            description: "Fallback generated".to_string(),
        })
        .collect();

    InstituteSearchResult {
        location_resolved: location.to_string(),
        lat: None,
        lng: None,
        institutes,
    }
}
