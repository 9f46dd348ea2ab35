pub mod embedding;
pub mod judge;
pub mod llm;
pub mod logging;
pub mod pdf;
pub mod store;
