use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when OPENAI_API_KEY is unset; parse requests then fail with
    /// `MissingConfiguration` instead of calling out.
    pub llm: Option<Arc<dyn CompletionModel>>,
}
