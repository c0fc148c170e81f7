//! LLM gateway — the single point of entry for all Gemini calls in the API.
//!
//! Two ordered transports: the typed `generateContent` call (the SDK-shaped
//! path) and, only when that fails, one raw POST against the equivalent v1
//! endpoint. Exactly one fallback hop, no retries. The gateway never errors
//! outward: a missing key, a double transport failure, or a response with no
//! extractable text all degrade to `None` and the caller synthesizes output.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const SDK_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REST_API_BASE: &str = "https://generativelanguage.googleapis.com/v1/models";
const CALL_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response carried no text content")]
    EmptyContent,
}

/// Generator abstraction carried in `AppState` as `Arc<dyn GenerativeGateway>`.
/// Tests swap in deterministic stubs without touching handler code.
#[async_trait]
pub trait GenerativeGateway: Send + Sync {
    /// Returns generated text, or `None` on any failure. Never errors.
    async fn call(&self, prompt: &str) -> Option<String>;
}

// ────────────────────────────────────────────────────────────────────────────
// Typed request / response bodies for the primary transport
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Joins the text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let joined: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

/// Gemini client used by institute search and chat.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(CALL_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }

    /// Primary transport: typed `generateContent` call.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = format!(
            "{SDK_API_BASE}/{}:generateContent?key={}",
            normalize_model(&self.model),
            self.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed.text().ok_or(GatewayError::EmptyContent)
    }

    /// Fallback transport: one raw POST against the v1 endpoint, response
    /// walked as untyped JSON.
    async fn generate_raw(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = format!(
            "{REST_API_BASE}/{}:generateContent?key={}",
            normalize_model(&self.model),
            self.api_key
        );
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: Value = response.json().await?;
        extract_candidate_text(&data).ok_or(GatewayError::EmptyContent)
    }
}

#[async_trait]
impl GenerativeGateway for GeminiClient {
    async fn call(&self, prompt: &str) -> Option<String> {
        if self.api_key.is_empty() {
            warn!("GEMINI_API_KEY not set; generator call skipped");
            return None;
        }

        match self.generate(prompt).await {
            Ok(text) => {
                debug!(chars = text.len(), "generator primary transport succeeded");
                return Some(text);
            }
            Err(e) => warn!("generator primary transport failed, trying REST fallback: {e}"),
        }

        match self.generate_raw(prompt).await {
            Ok(text) => {
                debug!(chars = text.len(), "generator REST fallback succeeded");
                Some(text)
            }
            Err(e) => {
                warn!("generator REST fallback failed: {e}");
                None
            }
        }
    }
}

/// Strips a `models/` namespace prefix from a configured model identifier.
fn normalize_model(model: &str) -> &str {
    model.strip_prefix("models/").unwrap_or(model)
}

/// Pulls the joined part texts of the first candidate out of an untyped
/// `generateContent` response.
fn extract_candidate_text(data: &Value) -> Option<String> {
    let parts = data
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let joined: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
