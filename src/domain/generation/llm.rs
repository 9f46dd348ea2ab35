//! Language model abstraction

use async_trait::async_trait;

use crate::domain::error::DomainError;

/// A completion returned by a language model provider
///
/// Providers differ in what they hand back: most return structured content,
/// some only a raw payload. `text()` prefers the structured content and falls
/// back to the raw payload rendered as text.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: Option<String>,
    pub raw: serde_json::Value,
}

impl CompletionResponse {
    pub fn from_content(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            raw: serde_json::Value::String(content.clone()),
            content: Some(content),
        }
    }

    pub fn text(&self) -> String {
        match &self.content {
            Some(content) => content.clone(),
            None => match &self.raw {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        }
    }
}

/// Generates completions from a prompt
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<CompletionResponse, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Mock language model returning scripted responses in order; the last
    /// response repeats once the script is exhausted.
    pub struct MockLanguageModel {
        responses: Vec<String>,
        call_count: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockLanguageModel {
        pub fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: responses.into_iter().map(String::from).collect(),
                call_count: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LanguageModel for MockLanguageModel {
        async fn complete(&self, prompt: &str) -> Result<CompletionResponse, DomainError> {
            let call = self.call_count.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            let idx = call.min(self.responses.len().saturating_sub(1));
            let content = self
                .responses
                .get(idx)
                .cloned()
                .ok_or_else(|| DomainError::provider("mock", "no scripted response"))?;
            Ok(CompletionResponse::from_content(content))
        }
    }
}
