use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Artifact paths default to the `models/` directory next to the binary so a
/// local run works without a `.env` file. The Gemini key is deliberately
/// optional: without it the institute search degrades to fallback synthesis
/// instead of refusing to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub classes_path: PathBuf,
    pub cluster_map_path: PathBuf,
    pub gemini_api_key: String,
    pub chat_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            model_path: env_or("MODEL_PATH", "models/model.json").into(),
            classes_path: env_or("CLASSES_PATH", "models/title_classes.json").into(),
            cluster_map_path: env_or("CLUSTER_MAP_PATH", "models/title_to_cluster.json").into(),
            gemini_api_key: env_or("GEMINI_API_KEY", ""),
            chat_model: env_or("CHAT_MODEL", crate::llm_client::DEFAULT_MODEL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
