use std::sync::Arc;

use crate::advisor::LanguageModel;
use crate::coach::client::CoachClient;
use crate::config::Config;
use crate::storage::quiz_store::QuizStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<QuizStore>,
    /// Mock advisor, or Claude with the mock as fallback when a key is configured.
    pub llm: Arc<dyn LanguageModel>,
    pub coach: CoachClient,
    pub config: Config,
}
