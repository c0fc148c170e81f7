pub mod health;
pub mod roadmap;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::classifier::handlers::handle_predict;
use crate::institutes::handlers::handle_institutions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/predict", post(handle_predict))
        .route("/institutions", post(handle_institutions))
        .route("/roadmap", post(roadmap::handle_roadmap))
        .route("/chat", post(handle_chat))
        .with_state(state)
}
