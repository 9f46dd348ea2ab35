//! OpenAI-compatible API types
//!
//! These types mirror the OpenAI API format for compatibility.

pub mod chat;
pub mod error;
pub mod models;

pub use chat::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ChatMessageRole,
};
pub use error::{ApiError, ApiErrorResponse};
pub use models::{ModelInfo, ModelList};
