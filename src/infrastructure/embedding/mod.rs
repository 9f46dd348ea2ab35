pub mod openai;

pub use openai::OpenAiEmbeddingProvider;
