//! Hours parser: turns a free-text description into `ParsedHours` JSON via the completion model.

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::hours::prompts::{build_hours_prompt, HOURS_PARSE_SYSTEM};
use crate::hours::validation::validate_model_output;
use crate::llm_client::CompletionModel;
use crate::state::AppState;

/// Runs one parse: input check, configuration check, a single model call, validation.
/// Neither check failing issues an outbound call.
pub async fn parse_hours(
    hours_text: &str,
    llm: Option<&dyn CompletionModel>,
    strict: bool,
) -> Result<Value, AppError> {
    let hours_text = hours_text.trim();
    if hours_text.is_empty() {
        return Err(AppError::InvalidInput);
    }

    let llm = llm.ok_or(AppError::MissingConfiguration)?;

    let prompt = build_hours_prompt(hours_text);
    let raw = llm.complete(HOURS_PARSE_SYSTEM, &prompt).await?;
    let parsed = validate_model_output(&raw, strict)?;

    let entries = parsed
        .get("hours")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    info!("Parsed business hours: {} entries", entries);

    Ok(parsed)
}

impl AppState {
    pub async fn parse_hours(&self, hours_text: &str) -> Result<Value, AppError> {
        parse_hours(
            hours_text,
            self.llm.as_deref(),
            self.config.strict_hours_validation,
        )
        .await
    }
}
