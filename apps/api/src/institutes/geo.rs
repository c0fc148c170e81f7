//! Geo enrichment — distances, map links, and per-institute field
//! normalization for parsed generator records.

use serde_json::Value;
use url::form_urlencoded;

use crate::institutes::parser::ParsedInstituteSet;
use crate::institutes::{Institute, InstituteSearchResult};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two lat/lng points.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Name-based maps deep link, quote-plus escaped.
pub fn maps_search_url(query: &str) -> String {
    let escaped: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("https://www.google.com/maps/search/{escaped}")
}

/// Coordinate-based maps deep link.
pub fn maps_place_url(lat: f64, lng: f64) -> String {
    format!("https://www.google.com/maps?q={lat},{lng}")
}

/// Normalizes every raw institute record of a parsed set: distance only when
/// origin and institute coordinates both exist, a maps_url always, courses as
/// a list and description as a string (empty when absent).
pub fn enrich(parsed: ParsedInstituteSet) -> InstituteSearchResult {
    let origin = match (parsed.origin_lat, parsed.origin_lng) {
        (Some(lat), Some(lng)) => Some((lat, lng)),
        _ => None,
    };

    let institutes = parsed
        .institutes
        .iter()
        .map(|record| enrich_record(record, origin))
        .collect();

    InstituteSearchResult {
        location_resolved: parsed.location_resolved,
        lat: parsed.origin_lat,
        lng: parsed.origin_lng,
        institutes,
    }
}

fn enrich_record(record: &Value, origin: Option<(f64, f64)>) -> Institute {
    let name = str_field(record, "name");
    let lat = record.get("lat").and_then(Value::as_f64);
    let lng = record.get("lng").and_then(Value::as_f64);

    let distance_km = match (origin, lat, lng) {
        (Some((olat, olng)), Some(ilat), Some(ilng)) => {
            Some(round2(haversine(olat, olng, ilat, ilng)))
        }
        _ => None,
    };

    let maps_url = match (lat, lng) {
        (Some(ilat), Some(ilng)) => maps_place_url(ilat, ilng),
        _ => maps_search_url(&name),
    };

    let courses = record
        .get("courses")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Institute {
        name,
        address: str_field(record, "address"),
        lat,
        lng,
        distance_km,
        maps_url,
        courses,
        description: str_field(record, "description"),
    }
}

fn str_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
