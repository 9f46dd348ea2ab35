//! Vector store abstraction

use async_trait::async_trait;

use crate::domain::chunk::LegalChunk;
use crate::domain::error::DomainError;

/// A chunk returned from a similarity search, with its distance to the query.
/// Smaller distance means more similar.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedPassage {
    pub chunk: LegalChunk,
    pub distance: f32,
}

/// Storage and similarity search over embedded chunks
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Add chunks with their embeddings. Embeddings are positionally paired
    /// with chunks; lengths must match.
    async fn add(
        &self,
        chunks: Vec<LegalChunk>,
        embeddings: Vec<Vec<f32>>,
    ) -> Result<(), DomainError>;

    /// Return the `k` nearest chunks to the query embedding, ascending by
    /// distance. Returns fewer than `k` when the store holds fewer chunks.
    async fn search(
        &self,
        query_embedding: &[f32],
        k: usize,
    ) -> Result<Vec<RetrievedPassage>, DomainError>;

    /// Number of chunks currently stored
    async fn count(&self) -> usize;

    /// Remove all stored chunks. Used for full corpus re-ingestion.
    async fn clear(&self) -> Result<(), DomainError>;
}
