//! Serve command - runs the HTTP API server

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::{create_router, AppState};
use crate::config::AppConfig;
use crate::domain::evaluation::FaithfulnessEvaluator;
use crate::domain::generation::AnswerGenerator;
use crate::domain::ingestion::IngestionPipeline;
use crate::domain::pipeline::{RetryController, RetryPolicy};
use crate::domain::retrieval::{EmbeddingProvider, Retriever, VectorStore};
use crate::infrastructure::embedding::OpenAiEmbeddingProvider;
use crate::infrastructure::judge::LlmFaithfulnessJudge;
use crate::infrastructure::llm::{HttpClient, OpenAiChatModel};
use crate::infrastructure::logging;
use crate::infrastructure::pdf::PdftotextExtractor;
use crate::infrastructure::store::InMemoryVectorStore;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let (state, ingestion) = build_app(&config);

    if config.corpus.ingest_on_startup {
        let corpus_dir = Path::new(&config.corpus.dir);
        match ingestion.ingest_directory(corpus_dir).await {
            Ok(summary) => info!(
                files = summary.files,
                chunks = summary.chunks,
                "Startup ingestion complete"
            ),
            Err(e) => warn!(
                error = %e,
                dir = %corpus_dir.display(),
                "Startup ingestion failed, serving with empty corpus"
            ),
        }
    }

    let app = create_router(state);
    let addr = build_socket_addr(&config)?;
    info!("Starting API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server shutdown complete");

    Ok(())
}

/// Wire providers, store, and the retry pipeline from configuration
fn build_app(config: &AppConfig) -> (AppState, IngestionPipeline) {
    let store: Arc<dyn VectorStore> = Arc::new(InMemoryVectorStore::new());

    let embeddings: Arc<dyn EmbeddingProvider> = Arc::new(OpenAiEmbeddingProvider::with_base_url(
        HttpClient::new(),
        config.embedding.api_key.clone(),
        config.embedding.model.clone(),
        config.embedding.base_url.clone(),
    ));

    let generation_model = Arc::new(OpenAiChatModel::with_base_url(
        HttpClient::new(),
        config.generation.api_key.clone(),
        config.generation.model.clone(),
        config.generation.base_url.clone(),
    ));

    let judge_model = Arc::new(OpenAiChatModel::with_base_url(
        HttpClient::new(),
        config.judge.api_key.clone(),
        config.judge.model.clone(),
        config.judge.base_url.clone(),
    ));

    let retriever = Arc::new(Retriever::new(store.clone(), embeddings.clone()));
    let generator = AnswerGenerator::new(retriever.clone(), generation_model);
    let evaluator = FaithfulnessEvaluator::new(Arc::new(LlmFaithfulnessJudge::new(
        judge_model,
        config.rag.threshold,
    )));

    let policy = RetryPolicy::default()
        .with_base_k(config.rag.base_k)
        .with_max_retries(config.rag.max_retries)
        .with_threshold(config.rag.threshold);

    let controller = Arc::new(RetryController::new(
        generator,
        retriever,
        evaluator,
        policy,
    ));

    let ingestion = IngestionPipeline::new(
        Arc::new(PdftotextExtractor::new()),
        embeddings,
        store.clone(),
    );

    (AppState::new(controller, store), ingestion)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
