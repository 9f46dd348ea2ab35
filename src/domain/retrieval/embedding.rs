//! Embedding provider abstraction

use async_trait::async_trait;

use crate::domain::error::DomainError;

/// Turns text into dense vectors for similarity search
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of documents, one vector per input, in order
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Embed a single query string
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Deterministic mock embedder: the vector is derived from the text's
    /// bytes, so equal texts always embed identically.
    pub struct MockEmbeddingProvider {
        dimensions: usize,
    }

    impl MockEmbeddingProvider {
        pub fn new(dimensions: usize) -> Self {
            Self { dimensions }
        }

        fn embed_text(&self, text: &str) -> Vec<f32> {
            let mut vector = vec![0.0f32; self.dimensions];
            for (i, byte) in text.bytes().enumerate() {
                vector[i % self.dimensions] += byte as f32 / 255.0;
            }
            vector
        }
    }

    #[async_trait]
    impl EmbeddingProvider for MockEmbeddingProvider {
        async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
            Ok(texts.iter().map(|t| self.embed_text(t)).collect())
        }

        async fn embed_query(&self, text: &str) -> Result<Vec<f32>, DomainError> {
            Ok(self.embed_text(text))
        }
    }
}
