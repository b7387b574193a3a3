use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chat::prompt::{build_chat_prompt, greeting};
use crate::errors::AppError;
use crate::quiz::handlers::load_record;
use crate::state::AppState;

pub const APOLOGY: &str =
    "I apologize, but I encountered an error. Please try asking your question again.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    fn assistant(content: String) -> Self {
        Self {
            role: "assistant",
            content,
        }
    }
}

/// GET /api/v1/quiz-responses/:id/chat
pub async fn handle_greeting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChatMessage>, AppError> {
    let record = load_record(&state, &id).await?;
    Ok(Json(ChatMessage::assistant(greeting(&record.quiz().user_name))))
}

/// POST /api/v1/quiz-responses/:id/chat
/// Advisor failures come back as an apology message, not an error status.
pub async fn handle_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatMessage>, AppError> {
    let question = req.message.trim();
    if question.is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let record = load_record(&state, &id).await?;
    let prompt = build_chat_prompt(&record, question);

    let content = match state.llm.complete(&prompt).await {
        Ok(answer) => {
            info!("Chat answer for quiz response {id} via {}", state.llm.backend());
            answer
        }
        Err(e) => {
            warn!("Chat advisor failed for quiz response {id}: {e}");
            APOLOGY.to_string()
        }
    };

    Ok(Json(ChatMessage::assistant(content)))
}
