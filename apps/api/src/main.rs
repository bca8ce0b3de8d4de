mod config;
mod errors;
mod hours;
mod llm_client;
mod models;
mod page;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionModel, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hours API v{}", env!("CARGO_PKG_VERSION"));

    // A missing key is not fatal: parse requests answer with a configuration error.
    let llm: Option<Arc<dyn CompletionModel>> = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(
                key.clone(),
                &config.openai_base_url,
                Duration::from_secs(config.openai_timeout_secs),
            )?;
            info!(
                "LLM client initialized (model: {}, endpoint: {})",
                llm_client::MODEL,
                config.openai_base_url
            );
            Some(Arc::new(client) as Arc<dyn CompletionModel>)
        }
        None => {
            warn!("OPENAI_API_KEY is not set; /api/parse-hours will return 500 until it is");
            None
        }
    };

    if config.strict_hours_validation {
        info!("Strict hours validation enabled");
    }

    let state = AppState {
        llm,
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
