pub mod app_config;

pub use app_config::{
    AppConfig, CorpusConfig, EmbeddingConfig, GenerationConfig, JudgeConfig, LogFormat,
    LoggingConfig, RagConfig, ServerConfig,
};
