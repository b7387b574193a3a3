//! Advisor — the "AI" behind plan generation and the chat assistant.
//!
//! `AppState` carries an `Arc<dyn LanguageModel>`. Without an API key that is
//! `MockLlm`, which answers from templates filled with figures pulled out of the
//! prompt. With a key it is `FallbackLlm`, which asks Claude first and drops back
//! to the templates when the call fails.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::llm_client::LlmError;
use crate::models::plan::AdvisorPlan;

pub mod chat;
pub mod extract;
pub mod plan;
pub mod prompts;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A text model the advisor can consult.
///
/// `complete` answers a free-form prompt (chat). `complete_plan` answers a prompt
/// that asks for the structured plan described by `prompts::plan_schema()`.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Short backend name for logs and API responses: "mock", "anthropic", ...
    fn backend(&self) -> &'static str;

    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    async fn complete_plan(&self, prompt: &str) -> Result<AdvisorPlan, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// MockLlm — template advisor
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic advisor. Plans are canned; chat answers are picked by topic
/// and personalised with the numbers found in the prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockLlm;

#[async_trait]
impl LanguageModel for MockLlm {
    fn backend(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        info!("Mock LLM invoked with prompt: {}...", preview(prompt));
        let facts = extract::extract_facts(prompt);
        let question = extract::extract_question(prompt);
        Ok(chat::respond(&facts, &question))
    }

    async fn complete_plan(&self, prompt: &str) -> Result<AdvisorPlan, LlmError> {
        info!("Mock LLM invoked with prompt: {}...", preview(prompt));
        Ok(plan::canned_plan())
    }
}

/// First 100 characters, for log lines.
fn preview(prompt: &str) -> String {
    prompt.chars().take(100).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackLlm — primary model with template fallback
// ────────────────────────────────────────────────────────────────────────────

/// Tries `primary`; any error is logged and the same prompt goes to `fallback`.
pub struct FallbackLlm {
    primary: Arc<dyn LanguageModel>,
    fallback: Arc<dyn LanguageModel>,
}

impl FallbackLlm {
    pub fn new(primary: Arc<dyn LanguageModel>, fallback: Arc<dyn LanguageModel>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl LanguageModel for FallbackLlm {
    fn backend(&self) -> &'static str {
        self.primary.backend()
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        match self.primary.complete(prompt).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(
                    "{} completion failed, using {}: {e}",
                    self.primary.backend(),
                    self.fallback.backend()
                );
                self.fallback.complete(prompt).await
            }
        }
    }

    async fn complete_plan(&self, prompt: &str) -> Result<AdvisorPlan, LlmError> {
        match self.primary.complete_plan(prompt).await {
            Ok(plan) => Ok(plan),
            Err(e) => {
                warn!(
                    "{} plan generation failed, using {}: {e}",
                    self.primary.backend(),
                    self.fallback.backend()
                );
                self.fallback.complete_plan(prompt).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingLlm;

    #[async_trait]
    impl LanguageModel for FailingLlm {
        fn backend(&self) -> &'static str {
            "failing"
        }

        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }

        async fn complete_plan(&self, _prompt: &str) -> Result<AdvisorPlan, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn test_mock_plan_is_canned() {
        let plan = MockLlm.complete_plan("anything").await.unwrap();
        assert_eq!(plan.financial_health_score, 72.0);
        assert_eq!(plan.portfolio.stocks, 80.0);
    }

    #[tokio::test]
    async fn test_mock_chat_uses_prompt_figures() {
        let prompt = "- Name: Sam\n- Monthly Expenses: $2,000\nUSER'S QUESTION: emergency fund?";
        let reply = MockLlm.complete(prompt).await.unwrap();
        assert!(reply.contains("Sam"));
        assert!(reply.contains("$12,000"));
    }

    #[tokio::test]
    async fn test_fallback_used_when_primary_fails() {
        let llm = FallbackLlm::new(Arc::new(FailingLlm), Arc::new(MockLlm));
        let plan = llm.complete_plan("plan please").await.unwrap();
        assert_eq!(plan.financial_health_score, 72.0);
        let reply = llm
            .complete("USER'S QUESTION: what is the weather like")
            .await
            .unwrap();
        assert!(reply.contains("personal finances"));
    }

    #[tokio::test]
    async fn test_fallback_reports_primary_backend() {
        let llm = FallbackLlm::new(Arc::new(FailingLlm), Arc::new(MockLlm));
        assert_eq!(llm.backend(), "failing");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(150);
        assert_eq!(preview(&long).chars().count(), 100);
    }
}
