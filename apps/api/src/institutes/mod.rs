//! Institute discovery — prompts the generator for nearby training
//! institutes, parses and geo-enriches its output, and synthesizes
//! deterministic fallbacks when the external call fails or returns garbage.

pub mod fallback;
pub mod geo;
pub mod handlers;
pub mod parser;
pub mod prompts;

use serde::Serialize;
use tracing::warn;

use crate::clusters::ClusterMap;
use crate::llm_client::GenerativeGateway;

/// One enriched (or synthesized) training institute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Institute {
    pub name: String,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub distance_km: Option<f64>,
    pub maps_url: String,
    pub courses: Vec<String>,
    pub description: String,
}

/// The full search result returned to the boundary layer.
#[derive(Debug, Clone, Serialize)]
pub struct InstituteSearchResult {
    pub location_resolved: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub institutes: Vec<Institute>,
}

/// Runs one institute search: resolve career titles, prompt the generator,
/// parse and enrich, fall back on any failure. Never errors for well-formed
/// input — external-service failure degrades output, it does not abort.
///
/// Generator output is not career-tagged, so `max_per_career` caps the merged
/// list at `careers.len() × max_per_career` after enrichment.
pub async fn search_institutes(
    gateway: &dyn GenerativeGateway,
    clusters: &ClusterMap,
    location: &str,
    careers: &[String],
    max_per_career: usize,
) -> InstituteSearchResult {
    let titles: Vec<String> = careers
        .iter()
        .map(|career| clusters.display_title(career))
        .collect();

    let prompt = prompts::institute_search_prompt(location, &titles);

    if let Some(raw) = gateway.call(&prompt).await {
        match parser::parse_institute_payload(&raw, location) {
            Ok(parsed) => {
                let mut result = geo::enrich(parsed);
                result.institutes.truncate(careers.len() * max_per_career);
                // An empty parsed list is as useless as a failed call.
                if !result.institutes.is_empty() || careers.is_empty() {
                    return result;
                }
                warn!("generator returned no institutes, synthesizing fallback");
            }
            Err(e) => warn!("generator output unusable, synthesizing fallback: {e}"),
        }
    }

    fallback::synthesize(location, &titles)
}
