//! Corpus ingestion: extract, clean, segment, embed, store

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::extractor::TextExtractor;
use crate::domain::chunk::{self, DocType};
use crate::domain::error::DomainError;
use crate::domain::retrieval::{EmbeddingProvider, VectorStore};

/// Chunks embedded and stored per batch
const DEFAULT_BATCH_SIZE: usize = 500;

/// Counts reported after ingesting a corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionSummary {
    pub files: usize,
    pub chunks: usize,
}

/// Builds the chunk store from a directory of source PDFs
///
/// Ingestion always replaces the whole corpus; there is no incremental
/// update of individual documents.
pub struct IngestionPipeline {
    extractor: Arc<dyn TextExtractor>,
    embeddings: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    batch_size: usize,
}

impl IngestionPipeline {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        embeddings: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
    ) -> Self {
        Self {
            extractor,
            embeddings,
            store,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Ingest every PDF in `dir`, replacing the current corpus
    pub async fn ingest_directory(&self, dir: &Path) -> Result<IngestionSummary, DomainError> {
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| DomainError::ingestion(format!("cannot read {}: {e}", dir.display())))?;

        let mut pdf_paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::ingestion(format!("cannot list {}: {e}", dir.display())))?
        {
            let path = entry.path();
            let is_pdf = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
            if is_pdf {
                pdf_paths.push(path);
            }
        }
        pdf_paths.sort();

        self.store.clear().await?;

        // one unreadable file must not abort the whole batch
        let mut summary = IngestionSummary { files: 0, chunks: 0 };
        for path in &pdf_paths {
            match self.ingest_file(path).await {
                Ok(chunks) => {
                    summary.files += 1;
                    summary.chunks += chunks;
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "Skipping unreadable document");
                }
            }
        }

        info!(
            files = summary.files,
            chunks = summary.chunks,
            dir = %dir.display(),
            "Corpus ingestion complete"
        );

        Ok(summary)
    }

    /// Ingest a single file; returns the number of chunks stored
    pub async fn ingest_file(&self, path: &Path) -> Result<usize, DomainError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DomainError::ingestion(format!("bad file name: {}", path.display())))?;

        let doc_type = DocType::from_filename(filename);
        let raw = self.extractor.extract(path).await?;
        let cleaned = chunk::clean_text(&raw);
        let chunks = chunk::segment(&cleaned, doc_type);

        info!(
            file = filename,
            doc_type = %doc_type,
            chunks = chunks.len(),
            "Segmented document"
        );

        let total = chunks.len();
        for batch in chunks.chunks(self.batch_size) {
            let texts: Vec<String> = batch.iter().map(|c| c.text.clone()).collect();
            let embeddings = self.embeddings.embed_documents(&texts).await?;
            self.store.add(batch.to_vec(), embeddings).await?;
        }

        Ok(total)
    }
}
