//! Faithfulness scoring over a judge

use std::sync::Arc;

use tracing::info;

use super::judge::FaithfulnessJudge;
use crate::domain::error::DomainError;

/// Wraps a judge and reduces its verdict to a plain score
pub struct FaithfulnessEvaluator {
    judge: Arc<dyn FaithfulnessJudge>,
}

impl FaithfulnessEvaluator {
    pub fn new(judge: Arc<dyn FaithfulnessJudge>) -> Self {
        Self { judge }
    }

    /// Score an answer against its retrieval context. A missing verdict
    /// scores 0.0.
    pub async fn evaluate(
        &self,
        query: &str,
        answer: &str,
        context: &[String],
    ) -> Result<f32, DomainError> {
        match self.judge.judge(query, answer, context).await? {
            Some(verdict) => {
                info!(
                    score = verdict.score,
                    passed = verdict.passed,
                    reason = %verdict.reason,
                    "Faithfulness verdict"
                );
                Ok(verdict.score)
            }
            None => Ok(0.0),
        }
    }
}
