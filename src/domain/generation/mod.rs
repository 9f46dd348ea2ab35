pub mod generator;
pub mod llm;
pub mod prompt;

pub use generator::AnswerGenerator;
pub use llm::{CompletionResponse, LanguageModel};
pub use prompt::{PromptTemplate, LEGAL_GUIDE_PROMPT};
