use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strengthlens::config::{AiProvider, Config};
use strengthlens::generation::diagnoser::{Diagnoser, LlmDiagnoser, MockDiagnoser};
use strengthlens::llm_client::{self, LlmClient};
use strengthlens::routes::{build_router, cors_layer};
use strengthlens::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Strength Lens API v{}", env!("CARGO_PKG_VERSION"));

    let diagnoser = build_diagnoser(&config)?;
    info!("Diagnoser initialized (backend: {})", diagnoser.backend());

    let state = AppState {
        config: config.clone(),
        diagnoser,
    };

    if config.cors_allowed_origins.is_empty() {
        info!("CORS_ALLOWED_ORIGINS not set, allowing any origin");
    }
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the diagnoser for `AI_PROVIDER`. Mock unless Anthropic is configured.
fn build_diagnoser(config: &Config) -> Result<Arc<dyn Diagnoser>> {
    match (config.ai_provider, &config.anthropic_api_key) {
        (AiProvider::Anthropic, Some(key)) => {
            let llm = LlmClient::new(key.clone(), Duration::from_secs(config.llm_timeout_secs))
                .context("Failed to build LLM HTTP client")?
                .with_base_url(&config.anthropic_base_url);
            info!(
                "LLM client initialized (model: {}, endpoint: {})",
                llm_client::MODEL,
                llm.endpoint()
            );
            Ok(Arc::new(LlmDiagnoser::new(llm)))
        }
        _ => Ok(Arc::new(MockDiagnoser)),
    }
}
