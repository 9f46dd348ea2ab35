//! In-memory vector store with exact nearest-neighbour scan
//!
//! The corpus is a few thousand statutory articles, so a full cosine scan per
//! query is fast enough and avoids an index that would need rebuilding on
//! every re-ingestion.

use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::chunk::LegalChunk;
use crate::domain::retrieval::{RetrievedPassage, VectorStore};
use crate::domain::DomainError;

struct StoredChunk {
    chunk: LegalChunk,
    embedding: Vec<f32>,
}

#[derive(Default)]
pub struct InMemoryVectorStore {
    chunks: RwLock<Vec<StoredChunk>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Cosine distance in `[0.0, 2.0]`; zero-norm vectors are maximally distant
fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }

    1.0 - dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn add(
        &self,
        chunks: Vec<LegalChunk>,
        embeddings: Vec<Vec<f32>>,
    ) -> Result<(), DomainError> {
        if chunks.len() != embeddings.len() {
            return Err(DomainError::retrieval(format!(
                "{} chunks but {} embeddings",
                chunks.len(),
                embeddings.len()
            )));
        }

        let mut stored = self.chunks.write().await;
        for (chunk, embedding) in chunks.into_iter().zip(embeddings) {
            stored.push(StoredChunk { chunk, embedding });
        }
        Ok(())
    }

    async fn search(
        &self,
        query_embedding: &[f32],
        k: usize,
    ) -> Result<Vec<RetrievedPassage>, DomainError> {
        let stored = self.chunks.read().await;

        let mut scored: Vec<RetrievedPassage> = stored
            .iter()
            .map(|s| RetrievedPassage {
                chunk: s.chunk.clone(),
                distance: cosine_distance(query_embedding, &s.embedding),
            })
            .collect();

        // stable sort keeps insertion order between equal distances
        scored.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(k);

        Ok(scored)
    }

    async fn count(&self) -> usize {
        self.chunks.read().await.len()
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.chunks.write().await.clear();
        Ok(())
    }
}
