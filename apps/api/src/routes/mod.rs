pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{brokerage, chat, coach, form, quiz, results};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Onboarding: quiz, form, plan
        .route("/api/v1/quiz/steps", get(quiz::handlers::handle_steps))
        .route(
            "/api/v1/quiz-responses",
            get(quiz::handlers::handle_filter).post(quiz::handlers::handle_create),
        )
        .route("/api/v1/quiz-responses/:id", get(quiz::handlers::handle_get))
        .route(
            "/api/v1/quiz-responses/:id/form",
            post(form::handlers::handle_submit_form),
        )
        // Results, chat and stored investment plan
        .route(
            "/api/v1/quiz-responses/:id/results",
            get(results::handlers::handle_results),
        )
        .route(
            "/api/v1/quiz-responses/:id/chat",
            get(chat::handlers::handle_greeting).post(chat::handlers::handle_chat),
        )
        .route(
            "/api/v1/quiz-responses/:id/investment-plan",
            post(coach::handlers::handle_investment_plan),
        )
        // Investment coach
        .route(
            "/api/investment-coach/recommendations",
            post(coach::handlers::handle_recommendations),
        )
        .route(
            "/api/investment-coach/etf/:symbol",
            get(coach::handlers::handle_etf_info),
        )
        .route(
            "/api/investment-coach/market-analysis",
            get(coach::handlers::handle_market_analysis),
        )
        .route(
            "/api/investment-coach/market-insights",
            post(coach::handlers::handle_market_insights),
        )
        .route(
            "/api/investment-coach/rebalance",
            post(coach::handlers::handle_rebalance),
        )
        // Brokerage simulation
        .route(
            "/api/v1/brokerage/options",
            get(brokerage::handlers::handle_options),
        )
        .route(
            "/api/v1/brokerage/accounts",
            post(brokerage::handlers::handle_open_account),
        )
        .with_state(state)
}
