//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<usize>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Liveness probe - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        chunks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness probe - the service can only answer queries once the corpus
/// holds at least one chunk
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let chunks = state.store.count().await;

    let (status, health) = if chunks > 0 {
        (StatusCode::OK, HealthStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Unhealthy)
    };

    let response = HealthResponse {
        status: health,
        version: env!("CARGO_PKG_VERSION").to_string(),
        chunks: Some(chunks),
    };

    (status, Json(response))
}
