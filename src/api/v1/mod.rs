//! OpenAI-compatible v1 API endpoints

pub mod chat;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/chat/completions", post(chat::create_chat_completion))
        .route("/models", get(models::list_models))
}
