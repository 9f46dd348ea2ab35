//! Ingest command - segments the corpus and reports chunk counts
//!
//! Runs extraction and segmentation only; nothing is embedded or stored.
//! Useful for checking a corpus before pointing the server at it.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::chunk::{self, DocType};
use crate::domain::ingestion::TextExtractor;
use crate::infrastructure::logging;
use crate::infrastructure::pdf::PdftotextExtractor;

#[derive(Args)]
pub struct IngestArgs {
    /// Corpus directory; defaults to the configured one
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub async fn run(args: IngestArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let dir = args
        .dir
        .unwrap_or_else(|| PathBuf::from(&config.corpus.dir));

    let extractor = PdftotextExtractor::new();
    let mut total_files = 0usize;
    let mut total_chunks = 0usize;

    let mut entries = tokio::fs::read_dir(&dir).await?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            paths.push(path);
        }
    }
    paths.sort();

    for path in &paths {
        let chunks = segment_file(&extractor, path).await?;
        total_files += 1;
        total_chunks += chunks;
    }

    info!(
        files = total_files,
        chunks = total_chunks,
        dir = %dir.display(),
        "Corpus segmentation check complete"
    );

    Ok(())
}

async fn segment_file(extractor: &PdftotextExtractor, path: &Path) -> anyhow::Result<usize> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let doc_type = DocType::from_filename(filename);

    let raw = extractor.extract(path).await?;
    let cleaned = chunk::clean_text(&raw);
    let chunks = chunk::segment(&cleaned, doc_type);

    info!(
        file = filename,
        doc_type = %doc_type,
        chunks = chunks.len(),
        "Segmented document"
    );

    Ok(chunks.len())
}
