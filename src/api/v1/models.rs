//! Models-listing endpoint handler

use axum::Json;

use crate::api::state::MODEL_ID;
use crate::api::types::ModelList;

/// GET /v1/models
///
/// There is exactly one model: the RAG system itself.
pub async fn list_models() -> Json<ModelList> {
    Json(ModelList::single(MODEL_ID))
}
