//! Chat completions endpoint handler

use axum::{extract::State, Json};
use tracing::{error, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};

/// POST /v1/chat/completions
///
/// The last message's content is the query; earlier messages are accepted
/// for client compatibility but not used.
pub async fn create_chat_completion(
    State(state): State<AppState>,
    Json(request): Json<ChatCompletionRequest>,
) -> Result<Json<ChatCompletionResponse>, ApiError> {
    let query = request
        .messages
        .last()
        .map(|m| m.content.as_str())
        .ok_or_else(|| ApiError::bad_request("Messages cannot be empty").with_param("messages"))?;

    info!(query = %query, "Processing chat completion request");

    let result = state.controller.answer(query).await.map_err(|e| {
        error!(error = %e, "Generation failed");
        ApiError::from(e)
    })?;

    info!(
        satisfied = result.satisfied,
        answer_len = result.answer.len(),
        "Generated answer"
    );

    Ok(Json(ChatCompletionResponse::from_answer(result.answer)))
}
