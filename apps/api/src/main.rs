mod advisor;
mod brokerage;
mod chat;
mod coach;
mod config;
mod errors;
mod form;
mod format;
mod llm_client;
mod models;
mod quiz;
mod results;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::{FallbackLlm, LanguageModel, MockLlm};
use crate::coach::client::CoachClient;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{local::LocalStorage, quiz_store::QuizStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FinStart API v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(QuizStore::new(LocalStorage::new(&config.store_path)));
    info!("Storage file: {}", config.store_path);

    let llm: Arc<dyn LanguageModel> = match &config.anthropic_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(FallbackLlm::new(
                Arc::new(LlmClient::new(key.clone())?),
                Arc::new(MockLlm),
            ))
        }
        None => {
            info!("No ANTHROPIC_API_KEY set, using the template advisor");
            Arc::new(MockLlm)
        }
    };

    let coach = CoachClient::new(config.investment_api_url.clone())?;
    match &config.investment_api_url {
        Some(url) => info!("Investment coach upstream: {url}"),
        None => info!("Investment coach running locally"),
    }

    let state = AppState {
        store,
        llm,
        coach,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
