//! Form state and the submit cycle behind the hours page.
//!
//! `FormState` is the only mutable UI state: input text, output text, output status
//! and the in-flight flag. A submission runs through a `HoursBackend` so the cycle is
//! testable without HTTP.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::models::hours::weekday_index;
use crate::state::AppState;

pub const DEFAULT_HOURS_TEXT: &str = "we're open tuesdays and thursdays 9-5, with an hour closed for lunch at 12. then wed open 1 - 6pm, and fri 9am-11.";
pub const READY_MESSAGE: &str = "Ready to parse your business hours...";
pub const PROCESSING_MESSAGE: &str = "Processing your request...";
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a description of your business hours.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl OutputStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            OutputStatus::Idle => "",
            OutputStatus::Success => "success",
            OutputStatus::Error => "error",
        }
    }
}

/// Whatever answers a submission: the parsed result, or a user-facing error message.
#[async_trait]
pub trait HoursBackend: Send + Sync {
    async fn submit_hours(&self, hours_text: &str) -> Result<Value, String>;
}

#[async_trait]
impl HoursBackend for AppState {
    async fn submit_hours(&self, hours_text: &str) -> Result<Value, String> {
        self.parse_hours(hours_text).await.map_err(|err| {
            err.log();
            err.user_message().to_string()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub hours_text: String,
    pub output: String,
    pub status: OutputStatus,
    pub loading: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_input(DEFAULT_HOURS_TEXT.to_string())
    }
}

impl FormState {
    pub fn with_input(hours_text: String) -> Self {
        Self {
            hours_text,
            output: READY_MESSAGE.to_string(),
            status: OutputStatus::Idle,
            loading: false,
        }
    }

    pub fn show_error(&mut self, message: &str) {
        self.output = message.to_string();
        self.status = OutputStatus::Error;
    }

    /// Runs one submission. Blank input never reaches the backend, and a submit while
    /// another is in flight is ignored. `loading` is cleared on every exit path.
    pub async fn submit<B: HoursBackend + ?Sized>(&mut self, backend: &B) {
        let trimmed = self.hours_text.trim().to_string();
        if trimmed.is_empty() {
            self.show_error(EMPTY_INPUT_MESSAGE);
            return;
        }

        if self.loading {
            warn!("Ignoring submit while a request is in flight");
            return;
        }

        let loading = LoadingGuard::acquire(&mut self.loading);
        self.status = OutputStatus::Idle;
        self.output = PROCESSING_MESSAGE.to_string();

        let (output, status) = match backend.submit_hours(&trimmed).await {
            Ok(result) => (format_result(result), OutputStatus::Success),
            Err(message) => (format!("Error: {message}"), OutputStatus::Error),
        };
        self.output = output;
        self.status = status;

        drop(loading);
    }
}

/// Sets a flag for its lifetime and clears it on drop, including during unwinding.
pub struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    pub fn acquire(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// Sorts `result.hours` (when present) and pretty-prints the whole result.
pub fn format_result(mut result: Value) -> String {
    if let Some(hours) = result.get_mut("hours").and_then(Value::as_array_mut) {
        sort_hours_by_day(hours);
    }
    serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string())
}

/// Stable sort by weekday (Monday first), then by the raw `start` string.
///
/// Unknown or missing days rank before Monday. Start times compare byte-wise, which is
/// chronological for `HH:MM` and puts `"closed"` after every numeric time.
pub fn sort_hours_by_day(hours: &mut [Value]) {
    hours.sort_by(compare_entries);
}

fn compare_entries(a: &Value, b: &Value) -> Ordering {
    day_rank(a)
        .cmp(&day_rank(b))
        .then_with(|| field(a, "start").cmp(field(b, "start")))
}

fn day_rank(entry: &Value) -> usize {
    weekday_index(field(entry, "day")).map_or(0, |i| i + 1)
}

fn field<'a>(entry: &'a Value, key: &str) -> &'a str {
    entry.get(key).and_then(Value::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::llm_client::fake::{FakeModel, FakeReply};
    use crate::llm_client::CompletionModel;

    fn entry(day: &str, start: &str, end: &str) -> Value {
        json!({"day": day, "start": start, "end": end})
    }

    fn summary(hours: &[Value]) -> Vec<String> {
        hours
            .iter()
            .map(|h| format!("{} {}-{}", field(h, "day"), field(h, "start"), field(h, "end")))
            .collect()
    }

    fn state_with(model: Option<Arc<FakeModel>>) -> AppState {
        AppState {
            config: Config {
                openai_api_key: model.as_ref().map(|_| "sk-test".to_string()),
                openai_base_url: "http://localhost".to_string(),
                openai_timeout_secs: 5,
                strict_hours_validation: false,
                port: 0,
                rust_log: "debug".to_string(),
            },
            llm: model.map(|m| m as Arc<dyn CompletionModel>),
        }
    }

    #[test]
    fn test_sort_orders_by_weekday_then_start() {
        let mut hours = vec![
            entry("Wednesday", "13:00", "18:00"),
            entry("Tuesday", "09:00", "12:00"),
            entry("Tuesday", "13:00", "17:00"),
        ];
        sort_hours_by_day(&mut hours);
        assert_eq!(
            summary(&hours),
            vec![
                "Tuesday 09:00-12:00",
                "Tuesday 13:00-17:00",
                "Wednesday 13:00-18:00"
            ]
        );
    }

    #[test]
    fn test_closed_sorts_after_numeric_starts_on_same_day() {
        let mut hours = vec![
            entry("Sunday", "closed", "closed"),
            entry("Sunday", "14:00", "16:00"),
            entry("Sunday", "10:00", "12:00"),
        ];
        sort_hours_by_day(&mut hours);
        assert_eq!(
            summary(&hours),
            vec![
                "Sunday 10:00-12:00",
                "Sunday 14:00-16:00",
                "Sunday closed-closed"
            ]
        );
    }

    #[test]
    fn test_unknown_days_rank_first_and_keep_order() {
        let mut hours = vec![
            entry("Monday", "09:00", "17:00"),
            entry("Holiday", "10:00", "11:00"),
            entry("Funday", "10:00", "12:00"),
        ];
        sort_hours_by_day(&mut hours);
        assert_eq!(
            summary(&hours),
            vec![
                "Holiday 10:00-11:00",
                "Funday 10:00-12:00",
                "Monday 09:00-17:00"
            ]
        );
    }

    #[test]
    fn test_format_result_without_hours_is_untouched() {
        let out = format_result(json!({"note": "nothing here"}));
        assert_eq!(out, "{\n  \"note\": \"nothing here\"\n}");
    }

    #[test]
    fn test_loading_guard_sets_flag_until_dropped() {
        let mut flag = false;
        std::mem::forget(LoadingGuard::acquire(&mut flag));
        assert!(flag);
    }

    #[test]
    fn test_loading_guard_clears_on_unwind() {
        let mut flag = true;
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = LoadingGuard::acquire(&mut flag);
            panic!("backend blew up");
        }));
        assert!(outcome.is_err());
        assert!(!flag);
    }

    #[tokio::test]
    async fn test_blank_submit_shows_error_without_backend_call() {
        let model = Arc::new(FakeModel::replying(r#"{"hours": []}"#));
        let backend = state_with(Some(model.clone()));
        let mut form = FormState::with_input("   ".to_string());

        form.submit(&backend).await;

        assert_eq!(form.status, OutputStatus::Error);
        assert_eq!(form.output, EMPTY_INPUT_MESSAGE);
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_ignored() {
        let model = Arc::new(FakeModel::replying(r#"{"hours": []}"#));
        let backend = state_with(Some(model.clone()));
        let mut form = FormState::default();
        form.loading = true;

        form.submit(&backend).await;

        assert_eq!(model.calls(), 0);
        assert_eq!(form.output, READY_MESSAGE);
    }

    #[tokio::test]
    async fn test_closed_sundays_weekdays_renders_monday_first() {
        let model = Arc::new(FakeModel::replying(
            r#"{"hours": [
                {"day": "Sunday", "start": "closed", "end": "closed"},
                {"day": "Friday", "start": "09:00", "end": "17:00"},
                {"day": "Monday", "start": "09:00", "end": "17:00"},
                {"day": "Wednesday", "start": "09:00", "end": "17:00"},
                {"day": "Tuesday", "start": "09:00", "end": "17:00"},
                {"day": "Thursday", "start": "09:00", "end": "17:00"}
            ]}"#,
        ));
        let backend = state_with(Some(model.clone()));
        let mut form = FormState::with_input("closed sundays, mon-fri 9-5".to_string());

        form.submit(&backend).await;

        assert_eq!(form.status, OutputStatus::Success);
        assert!(!form.loading);
        let rendered: Value = serde_json::from_str(&form.output).unwrap();
        let hours = rendered["hours"].as_array().unwrap();
        assert_eq!(
            summary(hours),
            vec![
                "Monday 09:00-17:00",
                "Tuesday 09:00-17:00",
                "Wednesday 09:00-17:00",
                "Thursday 09:00-17:00",
                "Friday 09:00-17:00",
                "Sunday closed-closed"
            ]
        );
        // key order from the model is preserved in the rendering
        assert!(form.output.contains("\"day\": \"Monday\",\n      \"start\""));
    }

    #[tokio::test]
    async fn test_backend_failure_shows_error_and_clears_loading() {
        let model = Arc::new(FakeModel::new(FakeReply::Unauthorized));
        let backend = state_with(Some(model));
        let mut form = FormState::with_input("mon 9-5".to_string());

        form.submit(&backend).await;

        assert_eq!(form.status, OutputStatus::Error);
        assert_eq!(form.output, "Error: Invalid OpenAI API key");
        assert!(!form.loading);
    }

    #[tokio::test]
    async fn test_missing_key_shows_configuration_error() {
        let backend = state_with(None);
        let mut form = FormState::with_input("mon 9-5".to_string());

        form.submit(&backend).await;

        assert_eq!(form.output, "Error: OpenAI API key not configured on server.");
    }
}
