//! Axum route handler for the guidance chatbot.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::{prompts::render_chat_prompt, ChatTurn, MAX_TURNS};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    pub message: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub reply: String,
    pub language: String,
    pub history_length: usize,
}

/// POST /chat
///
/// Unlike institute search, chat has no meaningful fallback: a failed
/// generator call surfaces as a 500.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);

    // Snapshot the history so the lock is not held across the generator call.
    let history = {
        let sessions = state.sessions.lock().expect("session store poisoned");
        sessions.get(&session_id).cloned().unwrap_or_default()
    };

    let prompt = render_chat_prompt(&history, &request.message);
    let reply = state
        .gateway
        .call(&prompt)
        .await
        .ok_or_else(|| AppError::Llm("generator unavailable for chat".to_string()))?
        .trim()
        .to_string();

    let history_length = {
        let mut sessions = state.sessions.lock().expect("session store poisoned");
        let turns = sessions.entry(session_id).or_default();
        turns.push(ChatTurn {
            user: request.message,
            bot: reply.clone(),
        });
        if turns.len() > MAX_TURNS {
            let excess = turns.len() - MAX_TURNS;
            turns.drain(..excess);
        }
        turns.len()
    };

    Ok(Json(ChatResponse {
        session_id,
        reply,
        language: request.language,
        history_length,
    }))
}
