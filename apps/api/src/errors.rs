use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Detail carried by a variant is logged, never sent to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("OpenAI API key is not configured")]
    MissingConfiguration,

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Model output is not valid hours JSON: {0}")]
    MalformedModelOutput(String),

    #[error("Upstream rejected the API key")]
    Unauthorized,

    #[error("Upstream rate limited the request")]
    RateLimited,

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::MissingConfiguration
            | AppError::EmptyResponse
            | AppError::MalformedModelOutput(_)
            | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The fixed message shown to end users for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::InvalidInput => "Please provide valid business hours text.",
            AppError::MissingConfiguration => "OpenAI API key not configured on server.",
            AppError::EmptyResponse => "No response from OpenAI API",
            AppError::MalformedModelOutput(_) => "Failed to parse AI response as valid JSON",
            AppError::Unauthorized => "Invalid OpenAI API key",
            AppError::RateLimited => "API quota exceeded or rate limited",
            AppError::Upstream(_) => "Failed to process request",
        }
    }

    /// Logs the internal detail at a level matching the failure.
    pub fn log(&self) {
        match self {
            AppError::InvalidInput => tracing::debug!("Rejected request: {}", self),
            AppError::MissingConfiguration => tracing::error!("{}; set OPENAI_API_KEY", self),
            AppError::Unauthorized | AppError::RateLimited => tracing::warn!("{}", self),
            AppError::EmptyResponse
            | AppError::MalformedModelOutput(_)
            | AppError::Upstream(_) => tracing::error!("{}", self),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Unauthorized => AppError::Unauthorized,
            LlmError::RateLimited => AppError::RateLimited,
            LlmError::EmptyContent => AppError::EmptyResponse,
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = Json(json!({ "error": self.user_message() }));

        (self.status(), body).into_response()
    }
}
