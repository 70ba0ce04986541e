pub mod catalog;
pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Reference data for the wizard
        .route("/api/strengths", get(catalog::handle_list_strengths))
        .route("/api/scenarios", get(catalog::handle_list_scenarios))
        // Generation
        .route("/api/generate", post(handlers::handle_generate))
        .route("/api/career", post(handlers::handle_career))
        .route("/api/guide", post(handlers::handle_guide))
        .with_state(state)
}

/// CORS for the web app. No configured origins means any origin may call the API.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
