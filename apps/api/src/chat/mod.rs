//! Guidance chatbot — per-session conversation state over the same
//! generative gateway used by institute search.

pub mod handlers;
pub mod prompts;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// One exchanged message pair.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub user: String,
    pub bot: String,
}

/// In-memory session history. Sessions live for the process lifetime and are
/// trimmed to the most recent [`MAX_TURNS`] turns.
pub type SessionStore = Arc<Mutex<HashMap<Uuid, Vec<ChatTurn>>>>;

pub const MAX_TURNS: usize = 10;

pub fn new_session_store() -> SessionStore {
    Arc::new(Mutex::new(HashMap::new()))
}
