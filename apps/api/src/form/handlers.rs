use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::form::metrics::FormMetrics;
use crate::form::prompt::build_plan_prompt;
use crate::form::sections::FormSections;
use crate::form::validation::validate_form;
use crate::models::plan::StoredPlan;
use crate::models::quiz_response::{to_fields, QuizResponse};
use crate::quiz::handlers::load_record;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FormOutcome {
    pub quiz_response: QuizResponse,
    pub metrics: FormMetrics,
    pub sections: FormSections,
    /// Backend that produced the plan.
    pub advisor: &'static str,
}

/// POST /api/v1/quiz-responses/:id/form
pub async fn handle_submit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<FormOutcome>, AppError> {
    let record = load_record(&state, &id).await?;
    let quiz = record.quiz();
    let sections = FormSections::for_quiz(&quiz);

    let details =
        validate_form(&sections, &body).map_err(|e| AppError::Validation(e.to_string()))?;
    let metrics = FormMetrics::compute(&details);
    let prompt = build_plan_prompt(&quiz, &details, &sections, &metrics);

    let plan = state
        .llm
        .complete_plan(&prompt)
        .await
        .map_err(|e| AppError::Advisor(e.to_string()))?;
    info!(
        "Generated plan for quiz response {id} via {} (score {})",
        state.llm.backend(),
        plan.financial_health_score
    );

    let mut updates = to_fields(&details).map_err(anyhow::Error::from)?;
    updates.extend(to_fields(&StoredPlan::from(plan)).map_err(anyhow::Error::from)?);

    let quiz_response = state
        .store
        .update(&id, updates)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz response {id} not found")))?;

    Ok(Json(FormOutcome {
        quiz_response,
        metrics,
        sections,
        advisor: state.llm.backend(),
    }))
}
