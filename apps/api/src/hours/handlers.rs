//! Axum route handlers for the Hours API.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseHoursRequest {
    #[serde(rename = "hoursText")]
    pub hours_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseHoursResponse {
    pub result: Value,
}

/// POST /api/parse-hours
///
/// Parses a natural-language hours description into `{"hours": [...]}`.
/// The body is read as JSON whatever its content type; any body that does not carry
/// a string `hoursText` is rejected as invalid input.
pub async fn handle_parse_hours(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ParseHoursResponse>, AppError> {
    let request: ParseHoursRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Unreadable parse-hours body: {e}");
        AppError::InvalidInput
    })?;

    let hours_text = request.hours_text.ok_or(AppError::InvalidInput)?;

    let result = state.parse_hours(&hours_text).await?;

    Ok(Json(ParseHoursResponse { result }))
}
