//! Axum route handlers for the hours page.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::page::form::FormState;
use crate::page::render::render_page;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub hours_text: String,
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&FormState::default()))
}

/// POST /
///
/// Runs one submission with the posted text and renders the outcome in place.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<PageForm>,
) -> Html<String> {
    let mut page = FormState::with_input(form.hours_text);
    page.submit(&state).await;
    Html(render_page(&page))
}
