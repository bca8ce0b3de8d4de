pub mod health;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::hours::handlers;
use crate::page::handlers as page;
use crate::state::AppState;

/// One CORS policy for every route: any origin, `POST`/`OPTIONS`, `Content-Type`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(page::handle_index).post(page::handle_submit))
        .route("/api/parse-hours", post(handlers::handle_parse_hours))
        .layer(cors_layer())
        .with_state(state)
}
