//! Model output validation.
//!
//! Default mode only requires syntactically valid JSON and returns the value untouched.
//! Strict mode also requires the `ParsedHours` shape with known day names and
//! `HH:MM` or `closed` times.

use chrono::NaiveTime;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::models::hours::{weekday_index, HoursEntry, ParsedHours, CLOSED};

pub fn validate_model_output(raw: &str, strict: bool) -> Result<Value, AppError> {
    let text = strip_json_fences(raw);
    if text.is_empty() {
        return Err(AppError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(text).map_err(|e| {
        AppError::MalformedModelOutput(format!("{e}; raw output: {raw}"))
    })?;

    if strict {
        check_structure(&value)?;
    }

    Ok(value)
}

fn check_structure(value: &Value) -> Result<(), AppError> {
    let parsed: ParsedHours = serde_json::from_value(value.clone())
        .map_err(|e| AppError::MalformedModelOutput(format!("unexpected shape: {e}")))?;
    for (i, entry) in parsed.hours.iter().enumerate() {
        check_entry(entry)
            .map_err(|reason| AppError::MalformedModelOutput(format!("entry {i}: {reason}")))?;
    }
    Ok(())
}

fn check_entry(entry: &HoursEntry) -> Result<(), String> {
    if weekday_index(&entry.day).is_none() {
        return Err(format!("unknown day '{}'", entry.day));
    }

    match (entry.start.as_str(), entry.end.as_str()) {
        (CLOSED, CLOSED) => Ok(()),
        (CLOSED, _) | (_, CLOSED) => Err(format!(
            "{} is half closed ({} - {})",
            entry.day, entry.start, entry.end
        )),
        (start, end) if is_hhmm(start) && is_hhmm(end) => Ok(()),
        (start, end) => Err(format!("{} has non HH:MM times ({start} - {end})", entry.day)),
    }
}

fn is_hhmm(s: &str) -> bool {
    s.len() == 5 && NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}
