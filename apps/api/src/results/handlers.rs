use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::quiz::handlers::load_record;
use crate::results::view::{self, ResultsView};
use crate::state::AppState;

/// GET /api/v1/quiz-responses/:id/results
/// Dashboard view of a record. Records without a plan render with empty cards.
pub async fn handle_results(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResultsView>, AppError> {
    let record = load_record(&state, &id).await?;
    Ok(Json(view::build(&record)))
}
