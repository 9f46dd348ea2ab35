//! Text extraction abstraction for source documents

use std::path::Path;

use async_trait::async_trait;

use crate::domain::error::DomainError;

/// Extracts plain text from a source document on disk
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<String, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    /// Mock extractor returning canned text per file name
    pub struct MockTextExtractor {
        texts: HashMap<PathBuf, String>,
    }

    impl MockTextExtractor {
        pub fn new() -> Self {
            Self {
                texts: HashMap::new(),
            }
        }

        pub fn with_text(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
            self.texts.insert(path.into(), text.into());
            self
        }
    }

    #[async_trait]
    impl TextExtractor for MockTextExtractor {
        async fn extract(&self, path: &Path) -> Result<String, DomainError> {
            self.texts
                .get(path)
                .cloned()
                .ok_or_else(|| DomainError::ingestion(format!("no text for {}", path.display())))
        }
    }
}
