//! PDF text extraction via the poppler `pdftotext` binary

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::ingestion::TextExtractor;
use crate::domain::DomainError;

/// Extracts text by invoking `pdftotext -layout <file> -`
///
/// Requires the poppler-utils `pdftotext` binary on PATH.
#[derive(Debug, Clone)]
pub struct PdftotextExtractor {
    binary: String,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        Self {
            binary: "pdftotext".to_string(),
        }
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PdftotextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, DomainError> {
        let output = Command::new(&self.binary)
            .arg("-layout")
            .arg(path)
            .arg("-")
            .output()
            .await
            .map_err(|e| {
                DomainError::ingestion(format!("failed to run {}: {e}", self.binary))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::ingestion(format!(
                "{} failed on {}: {}",
                self.binary,
                path.display(),
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(file = %path.display(), bytes = text.len(), "Extracted PDF text");
        Ok(text)
    }
}
