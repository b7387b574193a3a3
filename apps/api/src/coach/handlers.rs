use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::coach::market::{self, InsightsRequest, MarketInsights};
use crate::coach::rebalance::RebalanceRequest;
use crate::coach::recommendations::{CoachProfile, RecommendationRequest};
use crate::errors::AppError;
use crate::models::quiz_response::QuizResponse;
use crate::quiz::handlers::load_record;
use crate::state::AppState;

/// POST /api/investment-coach/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendationRequest>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.coach.recommendations(&req).await?))
}

/// GET /api/investment-coach/etf/:symbol
pub async fn handle_etf_info(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .coach
        .etf_info(&symbol)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("ETF {symbol} not found")))
}

/// GET /api/investment-coach/market-analysis
pub async fn handle_market_analysis(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.coach.market_analysis().await?))
}

/// POST /api/investment-coach/market-insights
pub async fn handle_market_insights(Json(req): Json<InsightsRequest>) -> Json<MarketInsights> {
    let now = chrono::Local::now().naive_local();
    Json(market::market_insights(&req, now))
}

/// POST /api/investment-coach/rebalance
pub async fn handle_rebalance(
    State(state): State<AppState>,
    Json(req): Json<RebalanceRequest>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.coach.rebalance(&req).await?))
}

/// Coach request for a stored record: its quiz profile, the plan's monthly
/// investment target and the form's goal.
pub fn request_for(record: &QuizResponse) -> RecommendationRequest {
    let quiz = record.quiz();
    let form = record.form();
    let plan = record.plan();

    RecommendationRequest {
        user_profile: CoachProfile {
            name: Some(quiz.user_name.clone()).filter(|n| !n.trim().is_empty()),
            age: quiz.age.map(f64::from),
            risk_tolerance: quiz.risk_tolerance.map(|r| r.as_str().to_string()),
            ..Default::default()
        },
        monthly_capacity: plan.monthly_investment_target,
        goal_amount: Some(form.goal_target_amount).filter(|a| *a > 0.0),
        goal_timeline_months: Some(form.goal_timeline_years.saturating_mul(12))
            .filter(|m| *m > 0),
    }
}

/// POST /api/v1/quiz-responses/:id/investment-plan
pub async fn handle_investment_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuizResponse>, AppError> {
    let record = load_record(&state, &id).await?;

    let recommendations = state.coach.recommendations(&request_for(&record)).await?;

    let mut updates = Map::new();
    updates.insert("investment_recommendations".to_string(), recommendations);
    let updated = state
        .store
        .update(&id, updates)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz response {id} not found")))?;

    info!("Stored investment plan for quiz response {id}");
    Ok(Json(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_for_stored_record() {
        let record = QuizResponse::new(
            "abc".to_string(),
            json!({
                "user_name": "Jordan",
                "age": 30,
                "risk_tolerance": "high",
                "goal_target_amount": 20000.0,
                "goal_timeline_years": 3,
                "monthly_investment_target": 400.0
            })
            .as_object()
            .cloned()
            .unwrap(),
        );
        let req = request_for(&record);
        assert_eq!(req.user_profile.display_name(), "Jordan");
        assert_eq!(req.user_profile.age(), 30);
        assert_eq!(
            req.user_profile.risk(),
            crate::models::profile::RiskTolerance::High
        );
        assert_eq!(req.monthly_capacity, Some(400.0));
        assert_eq!(req.goal_amount, Some(20000.0));
        assert_eq!(req.goal_timeline_months, Some(36));
    }

    #[test]
    fn test_request_for_empty_record_uses_defaults() {
        let record = QuizResponse::new("abc".to_string(), Map::new());
        let req = request_for(&record);
        assert_eq!(req.user_profile.display_name(), "there");
        assert_eq!(req.user_profile.age(), 25);
        assert!(req.monthly_capacity.is_none());
        assert!(req.goal_timeline_months.is_none());
    }
}
