use axum::{http::StatusCode, Json};
use tracing::info;

use crate::brokerage::application::{open_account, AccountApplication, OpenedAccount};
use crate::brokerage::catalogue::{options, BrokerageOptions};
use crate::errors::AppError;

/// GET /api/v1/brokerage/options
pub async fn handle_options() -> Json<BrokerageOptions> {
    Json(options())
}

/// POST /api/v1/brokerage/accounts
/// Simulated account opening. Nothing is persisted.
pub async fn handle_open_account(
    Json(app): Json<AccountApplication>,
) -> Result<(StatusCode, Json<OpenedAccount>), AppError> {
    let account = open_account(&app).map_err(|e| AppError::Validation(e.to_string()))?;
    info!(
        "Opened simulated {} account {} at {}",
        account.account_type_label, account.account_number, account.broker
    );
    Ok((StatusCode::CREATED, Json(account)))
}
