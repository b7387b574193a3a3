use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::quiz_response::{to_fields, QuizResponse};
use crate::quiz::steps::{progress_percent, steps, QuizStep};
use crate::quiz::validation::validate_submission;
use crate::state::AppState;
use crate::storage::quiz_store::QuizFilter;

#[derive(Serialize)]
pub struct StepView {
    pub index: usize,
    pub progress_percent: f64,
    #[serde(flatten)]
    pub step: QuizStep,
}

#[derive(Serialize)]
pub struct StepCatalog {
    pub total_steps: usize,
    pub steps: Vec<StepView>,
}

/// GET /api/v1/quiz/steps
pub async fn handle_steps() -> Json<StepCatalog> {
    let all = steps();
    let total_steps = all.len();
    Json(StepCatalog {
        total_steps,
        steps: all
            .into_iter()
            .enumerate()
            .map(|(index, step)| StepView {
                index,
                progress_percent: progress_percent(index, total_steps),
                step,
            })
            .collect(),
    })
}

/// POST /api/v1/quiz-responses
pub async fn handle_create(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<QuizResponse>), AppError> {
    let answers =
        validate_submission(&steps(), &body).map_err(|e| AppError::Validation(e.to_string()))?;
    let fields = to_fields(&answers).map_err(anyhow::Error::from)?;
    let created = state.store.create(fields).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/quiz-responses?id=
pub async fn handle_filter(
    State(state): State<AppState>,
    Query(filter): Query<QuizFilter>,
) -> Json<Vec<QuizResponse>> {
    Json(state.store.filter(&filter).await)
}

/// GET /api/v1/quiz-responses/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuizResponse>, AppError> {
    load_record(&state, &id).await.map(Json)
}

/// Fetches a record or fails with 404.
pub async fn load_record(state: &AppState, id: &str) -> Result<QuizResponse, AppError> {
    state
        .store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Quiz response {id} not found")))
}
