//! LLM-based faithfulness judge
//!
//! Asks a judge model to score how well an answer is supported by its
//! retrieval context. The judge model is configured independently of the
//! generation model, so a local generator can be checked by a stronger
//! hosted model.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::evaluation::{FaithfulnessJudge, FaithfulnessVerdict};
use crate::domain::generation::LanguageModel;
use crate::domain::DomainError;

const EVALUATION_PROMPT: &str = r#"You are evaluating the faithfulness of an answer to its source context.

Question:
${query}

Answer:
${answer}

Context:
${context}

Rate from 0 to 10 how strongly every claim in the answer is supported by the context. A claim that does not appear in the context lowers the score; an answer that only restates context information scores high. Ignore style and completeness, judge only factual grounding.

Respond with ONLY a JSON object: {"score": <0-10>, "reason": "<one sentence>"}"#;

pub struct LlmFaithfulnessJudge {
    model: Arc<dyn LanguageModel>,
    threshold: f32,
}

impl LlmFaithfulnessJudge {
    pub fn new(model: Arc<dyn LanguageModel>, threshold: f32) -> Self {
        Self { model, threshold }
    }

    fn build_prompt(&self, query: &str, answer: &str, context: &[String]) -> String {
        EVALUATION_PROMPT
            .replace("${query}", query)
            .replace("${answer}", answer)
            .replace("${context}", &context.join("\n\n"))
    }

    fn normalize_score(score: f32) -> f32 {
        (score / 10.0).clamp(0.0, 1.0)
    }
}

/// Response structure from the judge model
#[derive(Debug, Deserialize)]
struct JudgeResponse {
    score: f32,
    reason: Option<String>,
}

/// Extract a JSON object from a string (handles markdown code blocks)
fn extract_json(text: &str) -> Option<&str> {
    if let Some(start) = text.find('{') {
        if let Some(end) = text.rfind('}') {
            if start < end {
                return Some(&text[start..=end]);
            }
        }
    }

    None
}

#[async_trait]
impl FaithfulnessJudge for LlmFaithfulnessJudge {
    async fn judge(
        &self,
        query: &str,
        answer: &str,
        context: &[String],
    ) -> Result<Option<FaithfulnessVerdict>, DomainError> {
        let prompt = self.build_prompt(query, answer, context);
        let response = self.model.complete(&prompt).await?;
        let text = response.text();

        let Some(json_str) = extract_json(&text) else {
            warn!(response = %text, "Judge returned no JSON, treating as no verdict");
            return Ok(None);
        };

        let parsed: JudgeResponse = match serde_json::from_str(json_str) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, response = %text, "Unparseable judge response");
                return Ok(None);
            }
        };

        let score = Self::normalize_score(parsed.score);
        debug!(raw = parsed.score, normalized = score, "Judge scored answer");

        Ok(Some(FaithfulnessVerdict {
            score,
            passed: score >= self.threshold,
            reason: parsed.reason.unwrap_or_default(),
        }))
    }
}
