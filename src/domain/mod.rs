pub mod chunk;
pub mod error;
pub mod evaluation;
pub mod generation;
pub mod ingestion;
pub mod pipeline;
pub mod retrieval;

pub use error::DomainError;
