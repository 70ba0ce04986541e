use std::sync::Arc;

use crate::config::Config;
use crate::generation::diagnoser::{Diagnoser, MockDiagnoser};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable diagnoser. Default: MockDiagnoser. Swap via AI_PROVIDER env.
    pub diagnoser: Arc<dyn Diagnoser>,
}

impl AppState {
    pub fn mock(config: Config) -> Self {
        Self {
            config,
            diagnoser: Arc::new(MockDiagnoser),
        }
    }
}
