use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::v1;

/// Create the full router with application state
///
/// CORS is wide open; the API carries no credentials and is meant to be
/// called from browser frontends on other origins.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::evaluation::judge::mock::MockFaithfulnessJudge;
    use crate::domain::evaluation::FaithfulnessEvaluator;
    use crate::domain::generation::llm::mock::MockLanguageModel;
    use crate::domain::generation::AnswerGenerator;
    use crate::domain::pipeline::{RetryController, RetryPolicy};
    use crate::domain::retrieval::embedding::mock::MockEmbeddingProvider;
    use crate::domain::retrieval::store::mock::MockVectorStore;
    use crate::domain::retrieval::Retriever;

    fn test_state(store: Arc<MockVectorStore>) -> AppState {
        let retriever = Arc::new(Retriever::new(
            store.clone(),
            Arc::new(MockEmbeddingProvider::new(8)),
        ));
        let generator = AnswerGenerator::new(
            retriever.clone(),
            Arc::new(MockLanguageModel::new(vec!["raspuns de test"])),
        );
        let evaluator =
            FaithfulnessEvaluator::new(Arc::new(MockFaithfulnessJudge::with_scores(vec![0.9])));
        let controller = Arc::new(RetryController::new(
            generator,
            retriever,
            evaluator,
            RetryPolicy::default(),
        ));
        AppState::new(controller, store)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let store = Arc::new(MockVectorStore::new());
        let app = create_router(test_state(store));

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_unavailable_with_empty_corpus() {
        let store = Arc::new(MockVectorStore::new());
        let app = create_router(test_state(store));

        let response = app
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_models_endpoint_lists_single_model() {
        let store = Arc::new(MockVectorStore::new());
        let app = create_router(test_state(store));

        let response = app
            .oneshot(Request::get("/v1/models").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["object"], "list");
        assert_eq!(json["data"][0]["id"], "statute-qa-rag");
    }

    #[tokio::test]
    async fn test_chat_completion_round_trip() {
        let store = Arc::new(MockVectorStore::with_passages(vec![
            MockVectorStore::passage("1", "pasaj", 0.1),
        ]));
        let app = create_router(test_state(store));

        let request = Request::post("/v1/chat/completions")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"messages": [{"role": "user", "content": "Ce drepturi am?"}]}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["object"], "chat.completion");
        assert_eq!(json["choices"][0]["finish_reason"], "stop");
        assert_eq!(json["choices"][0]["message"]["role"], "assistant");
        assert_eq!(json["choices"][0]["message"]["content"], "raspuns de test");
    }

    #[tokio::test]
    async fn test_chat_completion_empty_messages_is_bad_request() {
        let store = Arc::new(MockVectorStore::new());
        let app = create_router(test_state(store));

        let request = Request::post("/v1/chat/completions")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"messages": []}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
