pub mod embedding;
pub mod retriever;
pub mod store;

pub use embedding::EmbeddingProvider;
pub use retriever::Retriever;
pub use store::{RetrievedPassage, VectorStore};
