//! Adaptive generation loop with faithfulness-gated retries

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::error::DomainError;
use crate::domain::evaluation::FaithfulnessEvaluator;
use crate::domain::generation::AnswerGenerator;
use crate::domain::retrieval::Retriever;

/// How many extra passages are retrieved on every attempt after the first
const RETRY_K_STEP: usize = 2;

/// Tuning knobs for the retry loop
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Passages retrieved on the first attempt
    pub base_k: usize,
    /// Maximum number of generation attempts; zero disables generation
    pub max_retries: usize,
    /// Minimum faithfulness score for an answer to be accepted
    pub threshold: f32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_k: 3,
            max_retries: 3,
            threshold: 0.7,
        }
    }
}

impl RetryPolicy {
    pub fn with_base_k(mut self, base_k: usize) -> Self {
        self.base_k = base_k;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Retrieval depth for a zero-based attempt index. The step is applied
    /// once after the first miss and never compounds.
    pub fn k_for_attempt(&self, attempt: usize) -> usize {
        if attempt > 0 {
            self.base_k + RETRY_K_STEP
        } else {
            self.base_k
        }
    }
}

/// One generation attempt and its score
#[derive(Debug, Clone)]
pub struct GenerationAttempt {
    pub k: usize,
    pub answer: String,
    pub faithfulness_score: f32,
}

/// Final result of a query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// The accepted answer, or the best-scoring one when no attempt passed.
    /// Empty when no attempt ran at all.
    pub answer: String,
    /// Whether any attempt met the faithfulness threshold
    pub satisfied: bool,
}

enum AttemptOutcome {
    Satisfied(GenerationAttempt),
    BelowThreshold(GenerationAttempt),
}

/// Drives generation attempts until an answer meets the faithfulness
/// threshold or the retry budget is exhausted
pub struct RetryController {
    generator: AnswerGenerator,
    retriever: Arc<Retriever>,
    evaluator: FaithfulnessEvaluator,
    policy: RetryPolicy,
}

impl RetryController {
    pub fn new(
        generator: AnswerGenerator,
        retriever: Arc<Retriever>,
        evaluator: FaithfulnessEvaluator,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            generator,
            retriever,
            evaluator,
            policy,
        }
    }

    /// Answer a query. Each attempt generates against freshly retrieved
    /// context, scores the answer, and either accepts it or records it as a
    /// candidate for the exhaustion fallback.
    pub async fn answer(&self, query: &str) -> Result<QueryResult, DomainError> {
        let mut best: Option<GenerationAttempt> = None;

        for attempt in 0..self.policy.max_retries {
            let k = self.policy.k_for_attempt(attempt);
            info!(attempt = attempt + 1, k = k, "Generation attempt");

            match self.run_attempt(query, k).await? {
                AttemptOutcome::Satisfied(outcome) => {
                    info!(
                        attempt = attempt + 1,
                        score = outcome.faithfulness_score,
                        "Threshold met, returning answer"
                    );
                    return Ok(QueryResult {
                        answer: outcome.answer,
                        satisfied: true,
                    });
                }
                AttemptOutcome::BelowThreshold(outcome) => {
                    let current_best = best.as_ref().map(|b| b.faithfulness_score).unwrap_or(0.0);
                    // strict comparison: ties keep the earliest attempt
                    if outcome.faithfulness_score > current_best {
                        best = Some(outcome);
                    }
                }
            }
        }

        let best_score = best.as_ref().map(|b| b.faithfulness_score).unwrap_or(0.0);
        warn!(
            threshold = self.policy.threshold,
            attempts = self.policy.max_retries,
            best_score = best_score,
            "Threshold not met, returning best answer"
        );

        Ok(QueryResult {
            answer: best.map(|b| b.answer).unwrap_or_default(),
            satisfied: false,
        })
    }

    async fn run_attempt(&self, query: &str, k: usize) -> Result<AttemptOutcome, DomainError> {
        let answer = self.generator.generate(query, k).await?;

        // the judge scores against its own retrieval at the same depth, not
        // against the context the generator saw
        let context: Vec<String> = self
            .retriever
            .retrieve(query, k)
            .await?
            .into_iter()
            .map(|p| p.chunk.text)
            .collect();

        let faithfulness_score = self.evaluator.evaluate(query, &answer, &context).await?;

        let attempt = GenerationAttempt {
            k,
            answer,
            faithfulness_score,
        };

        if faithfulness_score >= self.policy.threshold {
            Ok(AttemptOutcome::Satisfied(attempt))
        } else {
            Ok(AttemptOutcome::BelowThreshold(attempt))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::judge::mock::MockFaithfulnessJudge;
    use crate::domain::generation::llm::mock::MockLanguageModel;
    use crate::domain::generation::PromptTemplate;
    use crate::domain::retrieval::embedding::mock::MockEmbeddingProvider;
    use crate::domain::retrieval::store::mock::MockVectorStore;

    struct Harness {
        controller: RetryController,
        store: Arc<MockVectorStore>,
        llm: Arc<MockLanguageModel>,
        judge_calls: Arc<MockFaithfulnessJudge>,
    }

    fn harness(
        answers: Vec<&str>,
        scores: Vec<f32>,
        policy: RetryPolicy,
    ) -> Harness {
        harness_with_judge(answers, MockFaithfulnessJudge::with_scores(scores), policy)
    }

    fn harness_with_judge(
        answers: Vec<&str>,
        judge: MockFaithfulnessJudge,
        policy: RetryPolicy,
    ) -> Harness {
        let store = Arc::new(MockVectorStore::with_passages(vec![
            MockVectorStore::passage("1", "pasaj unu", 0.1),
            MockVectorStore::passage("2", "pasaj doi", 0.2),
        ]));
        let retriever = Arc::new(Retriever::new(
            store.clone(),
            Arc::new(MockEmbeddingProvider::new(8)),
        ));
        let llm = Arc::new(MockLanguageModel::new(answers));
        let judge = Arc::new(judge);

        let generator = AnswerGenerator::new(retriever.clone(), llm.clone())
            .with_template(PromptTemplate::new("{question}|{context}"));
        let evaluator = FaithfulnessEvaluator::new(judge.clone());

        Harness {
            controller: RetryController::new(generator, retriever, evaluator, policy),
            store,
            llm,
            judge_calls: judge,
        }
    }

    #[tokio::test]
    async fn test_first_attempt_success_runs_single_cycle() {
        let h = harness(vec!["raspuns"], vec![0.85], RetryPolicy::default());

        let result = h.controller.answer("intrebare").await.unwrap();

        assert_eq!(result.answer, "raspuns");
        assert!(result.satisfied);
        assert_eq!(h.llm.call_count(), 1);
        assert_eq!(h.judge_calls.call_count(), 1);
        // one retrieval for generation, one for the judge's context
        assert_eq!(h.store.search_count(), 2);
        assert_eq!(h.store.search_ks(), vec![3, 3]);
    }

    #[tokio::test]
    async fn test_k_escalates_once_after_first_miss() {
        let h = harness(
            vec!["a1", "a2", "a3"],
            vec![0.4, 0.4, 0.4],
            RetryPolicy::default(),
        );

        let result = h.controller.answer("intrebare").await.unwrap();

        assert!(!result.satisfied);
        assert_eq!(h.llm.call_count(), 3);
        // k stays at base_k + 2 on every retry, never compounding
        assert_eq!(h.store.search_ks(), vec![3, 3, 5, 5, 5, 5]);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_best_answer() {
        let h = harness(
            vec!["slab", "mai bun", "mediocru"],
            vec![0.3, 0.6, 0.5],
            RetryPolicy::default(),
        );

        let result = h.controller.answer("intrebare").await.unwrap();

        assert_eq!(result.answer, "mai bun");
        assert!(!result.satisfied);
    }

    #[tokio::test]
    async fn test_tied_scores_keep_earliest_answer() {
        let h = harness(
            vec!["primul", "al doilea", "al treilea"],
            vec![0.6, 0.6, 0.6],
            RetryPolicy::default(),
        );

        let result = h.controller.answer("intrebare").await.unwrap();
        assert_eq!(result.answer, "primul");
    }

    #[tokio::test]
    async fn test_threshold_is_inclusive() {
        let h = harness(
            vec!["exact"],
            vec![0.7],
            RetryPolicy::default(),
        );

        let result = h.controller.answer("intrebare").await.unwrap();
        assert!(result.satisfied);
        assert_eq!(result.answer, "exact");
    }

    #[tokio::test]
    async fn test_zero_max_retries_yields_empty_unsatisfied_result() {
        let h = harness(
            vec!["nefolosit"],
            vec![0.9],
            RetryPolicy::default().with_max_retries(0),
        );

        let result = h.controller.answer("intrebare").await.unwrap();

        assert_eq!(result.answer, "");
        assert!(!result.satisfied);
        assert_eq!(h.llm.call_count(), 0);
        assert_eq!(h.judge_calls.call_count(), 0);
        assert_eq!(h.store.search_count(), 0);
    }

    #[tokio::test]
    async fn test_success_on_second_attempt_stops_retrying() {
        let h = harness(
            vec!["slab", "bun", "nefolosit"],
            vec![0.4, 0.8, 0.9],
            RetryPolicy::default(),
        );

        let result = h.controller.answer("intrebare").await.unwrap();

        assert_eq!(result.answer, "bun");
        assert!(result.satisfied);
        assert_eq!(h.llm.call_count(), 2);
        assert_eq!(h.store.search_ks(), vec![3, 3, 5, 5]);
    }

    #[tokio::test]
    async fn test_judge_error_on_retry_aborts_the_whole_call() {
        let judge = MockFaithfulnessJudge::with_scores(vec![0.4]).then_error("judge unavailable");
        let h = harness_with_judge(vec!["primul", "al doilea"], judge, RetryPolicy::default());

        let result = h.controller.answer("intrebare").await;

        // the attempt-1 candidate is not returned as a partial result
        assert!(matches!(result, Err(DomainError::Evaluation { .. })));
        assert_eq!(h.llm.call_count(), 2);
    }

    #[tokio::test]
    async fn test_generation_error_propagates_before_scoring() {
        let h = harness(vec![], vec![0.9], RetryPolicy::default());

        let result = h.controller.answer("intrebare").await;

        assert!(matches!(result, Err(DomainError::Provider { .. })));
        assert_eq!(h.judge_calls.call_count(), 0);
    }

    #[test]
    fn test_policy_k_for_attempt() {
        let policy = RetryPolicy::default().with_base_k(4);
        assert_eq!(policy.k_for_attempt(0), 4);
        assert_eq!(policy.k_for_attempt(1), 6);
        assert_eq!(policy.k_for_attempt(5), 6);
    }
}
