pub mod evaluator;
pub mod judge;

pub use evaluator::FaithfulnessEvaluator;
pub use judge::{FaithfulnessJudge, FaithfulnessVerdict};
