pub mod extractor;
pub mod pipeline;

pub use extractor::TextExtractor;
pub use pipeline::{IngestionPipeline, IngestionSummary};
