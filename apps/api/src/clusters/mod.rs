#![allow(dead_code)]

//! Cluster resolver — maps opaque classifier label codes to human titles and
//! broader occupational clusters.
//!
//! Forward lookup (label_code → entry) is exact-key. Reverse lookup
//! (title → entry) is case-insensitive. Missing entries never raise: callers
//! fall through to a humanized rendering of the raw code.

pub mod data;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

/// Metadata for one career label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusterEntry {
    pub title_label: String,
    pub cluster_code: String,
    pub cluster_label: String,
}

/// Read-only label_code → cluster metadata map, loaded once at startup.
#[derive(Debug, Default)]
pub struct ClusterMap {
    entries: HashMap<String, ClusterEntry>,
    /// Lowercased title_label → label_code, for reverse lookup.
    by_title: HashMap<String, String>,
}

impl ClusterMap {
    pub fn new(entries: HashMap<String, ClusterEntry>) -> Self {
        let by_title = entries
            .iter()
            .map(|(code, entry)| (entry.title_label.to_lowercase(), code.clone()))
            .collect();
        ClusterMap { entries, by_title }
    }

    /// The compiled-in career table.
    pub fn builtin() -> Self {
        Self::new(
            data::CAREER_CLUSTERS
                .iter()
                .map(|(code, title, cluster_code, cluster_label)| {
                    (
                        code.to_string(),
                        ClusterEntry {
                            title_label: title.to_string(),
                            cluster_code: cluster_code.to_string(),
                            cluster_label: cluster_label.to_string(),
                        },
                    )
                })
                .collect(),
        )
    }

    /// Parses a `{label_code: {title_label, cluster_code, cluster_label}}`
    /// JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read cluster map {}", path.display()))?;
        let entries: HashMap<String, ClusterEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse cluster map {}", path.display()))?;
        Ok(Self::new(entries))
    }

    /// Loads the configured map, degrading to the built-in table when the file
    /// is absent or unreadable. Prediction stays fully functional either way.
    pub fn load_or_builtin(path: &Path) -> Self {
        if !path.exists() {
            info!("no cluster map at {}, using built-in table", path.display());
            return Self::builtin();
        }
        match Self::from_path(path) {
            Ok(map) => {
                info!(entries = map.len(), "cluster map loaded from {}", path.display());
                map
            }
            Err(e) => {
                warn!("cluster map unreadable, using built-in table: {e:#}");
                Self::builtin()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-key forward lookup.
    pub fn get(&self, label_code: &str) -> Option<&ClusterEntry> {
        self.entries.get(label_code)
    }

    /// Case-insensitive reverse lookup by human title.
    pub fn resolve_title(&self, title: &str) -> Option<&ClusterEntry> {
        self.by_title
            .get(&title.to_lowercase())
            .and_then(|code| self.entries.get(code))
    }

    /// Best-effort display title for a career given either as a label_code or
    /// a human title. Unknown inputs are humanized, never an error.
    pub fn display_title(&self, career: &str) -> String {
        if let Some(entry) = self.get(career) {
            return entry.title_label.clone();
        }
        if let Some(entry) = self.resolve_title(career) {
            return entry.title_label.clone();
        }
        humanize(career)
    }
}

/// Underscores → spaces, Title Case. `"ml_engineer"` → `"Ml Engineer"`.
pub fn humanize(label_code: &str) -> String {
    label_code
        .replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_lookup_is_exact_key() {
        let map = ClusterMap::builtin();
        let entry = map.get("tailor").unwrap();
        assert_eq!(entry.title_label, "Tailor");
        assert_eq!(entry.cluster_code, "skilled_trades");
        assert!(map.get("Tailor").is_none());
    }

    #[test]
    fn test_reverse_lookup_is_case_insensitive() {
        let map = ClusterMap::builtin();
        let lower = map.resolve_title("tailor").unwrap();
        let mixed = map.resolve_title("TaIlOr").unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower.cluster_label, "Skilled Trades & Vocational");
    }

    #[test]
    fn test_display_title_resolves_codes_and_titles_identically() {
        let map = ClusterMap::builtin();
        assert_eq!(map.display_title("tailor"), "Tailor");
        assert_eq!(map.display_title("Tailor"), "Tailor");
        assert_eq!(map.display_title("doctor_mbbs"), "Doctor (MBBS)");
    }

    #[test]
    fn test_missing_entry_humanizes_instead_of_raising() {
        let map = ClusterMap::builtin();
        assert_eq!(map.display_title("quantum_botanist"), "Quantum Botanist");
        assert!(map.get("quantum_botanist").is_none());
    }

    #[test]
    fn test_humanize_title_cases_each_word() {
        assert_eq!(humanize("hotel_manager"), "Hotel Manager");
        assert_eq!(humanize("IAS_officer"), "Ias Officer");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_builtin_table_is_complete() {
        let map = ClusterMap::builtin();
        assert_eq!(map.len(), data::CAREER_CLUSTERS.len());
    }

    #[test]
    fn test_cluster_entry_deserializes_from_map_file_shape() {
        let json = r#"{
            "tailor": {
                "title_label": "Tailor",
                "cluster_code": "skilled_trades",
                "cluster_label": "Skilled Trades & Vocational"
            }
        }"#;
        let entries: HashMap<String, ClusterEntry> = serde_json::from_str(json).unwrap();
        let map = ClusterMap::new(entries);
        assert_eq!(map.len(), 1);
        assert_eq!(map.display_title("tailor"), "Tailor");
    }
}
