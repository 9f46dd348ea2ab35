//! Faithfulness judge abstraction

use async_trait::async_trait;

use crate::domain::error::DomainError;

/// Verdict produced by a faithfulness judge for one answer
#[derive(Debug, Clone, PartialEq)]
pub struct FaithfulnessVerdict {
    /// Score in `[0.0, 1.0]`; higher means more grounded in the context
    pub score: f32,
    /// Whether the score met the judge's own threshold
    pub passed: bool,
    /// Judge's explanation for the score
    pub reason: String,
}

/// Scores how faithful an answer is to its retrieval context
///
/// `Ok(None)` means the judge produced no usable verdict; callers treat that
/// as a zero score rather than an error.
#[async_trait]
pub trait FaithfulnessJudge: Send + Sync {
    async fn judge(
        &self,
        query: &str,
        answer: &str,
        context: &[String],
    ) -> Result<Option<FaithfulnessVerdict>, DomainError>;
}
