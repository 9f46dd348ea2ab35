//! Statute QA
//!
//! Retrieval-augmented question answering over Romanian statutory texts:
//! - Article-level segmentation of legal PDFs
//! - Similarity retrieval over an in-memory vector store
//! - Grounded answer generation with faithfulness-gated retries
//! - OpenAI-compatible chat API

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
