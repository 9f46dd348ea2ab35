//! OpenAI-compatible chat completion provider
//!
//! Works against the OpenAI API itself or any compatible server (LM Studio,
//! vLLM, Ollama's compatibility endpoint). The base URL carries the `/v1`
//! prefix so local servers can be addressed directly.

use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::generation::{CompletionResponse, LanguageModel};
use crate::domain::DomainError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug)]
pub struct OpenAiChatModel<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl<C: HttpClientTrait> OpenAiChatModel<C> {
    pub fn new(client: C, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, model, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            auth_header: format!("Bearer {}", api_key.into()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature: 0.0,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }
}

#[async_trait]
impl<C: HttpClientTrait> LanguageModel for OpenAiChatModel<C> {
    async fn complete(&self, prompt: &str) -> Result<CompletionResponse, DomainError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": self.temperature,
        });

        let raw = self
            .client
            .post_json(&self.chat_completions_url(), self.headers(), &body)
            .await?;

        let content = serde_json::from_value::<ChatResponse>(raw.clone())
            .ok()
            .and_then(|r| r.choices.into_iter().next())
            .and_then(|c| c.message.content);

        Ok(CompletionResponse { content, raw })
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
