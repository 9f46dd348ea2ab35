pub mod controller;

pub use controller::{GenerationAttempt, QueryResult, RetryController, RetryPolicy};
