pub mod llm_judge;

pub use llm_judge::LlmFaithfulnessJudge;
