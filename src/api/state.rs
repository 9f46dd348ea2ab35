//! Application state shared across handlers

use std::sync::Arc;

use crate::domain::pipeline::RetryController;
use crate::domain::retrieval::VectorStore;

/// Model id advertised by the models-listing endpoint
pub const MODEL_ID: &str = "statute-qa-rag";

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<RetryController>,
    pub store: Arc<dyn VectorStore>,
}

impl AppState {
    pub fn new(controller: Arc<RetryController>, store: Arc<dyn VectorStore>) -> Self {
        Self { controller, store }
    }
}
