//! Query-time retrieval over the chunk store

use std::sync::Arc;

use tracing::debug;

use super::embedding::EmbeddingProvider;
use super::store::{RetrievedPassage, VectorStore};
use crate::domain::error::DomainError;

/// Embeds a query and searches the vector store for the nearest chunks
pub struct Retriever {
    store: Arc<dyn VectorStore>,
    embeddings: Arc<dyn EmbeddingProvider>,
}

impl Retriever {
    pub fn new(store: Arc<dyn VectorStore>, embeddings: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embeddings }
    }

    /// Retrieve the `k` most similar chunks for `query`, ascending by
    /// distance. Yields fewer than `k` passages when the store is smaller.
    pub async fn retrieve(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<RetrievedPassage>, DomainError> {
        let query_embedding = self.embeddings.embed_query(query).await?;
        let mut passages = self.store.search(&query_embedding, k).await?;

        // ordering is guaranteed here, whatever the store returns
        passages.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            k = k,
            retrieved = passages.len(),
            "Retrieved passages for query"
        );

        Ok(passages)
    }
}
