//! Checks the environment configuration and the static copy tables.
//! Exits non-zero when anything is wrong, so it can gate a deploy.

use anyhow::{bail, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use strengthlens::analysis::conflicts::referenced_ids;
use strengthlens::catalog::{check_integrity, find_strength};
use strengthlens::config::{AiProvider, Config};
use strengthlens::generation::mock_rules::check_coverage;
use strengthlens::routes::cors_layer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut problems = Vec::new();

    match Config::from_env() {
        Ok(config) => {
            info!(
                "Config OK: port={} provider={:?} llm_timeout={}s",
                config.port, config.ai_provider, config.llm_timeout_secs
            );
            if config.ai_provider == AiProvider::Mock {
                info!("AI_PROVIDER is mock; /api/generate will serve templates only");
            }
            if let Err(e) = cors_layer(&config.cors_allowed_origins) {
                problems.push(format!("config: {e:#}"));
            }
        }
        Err(e) => problems.push(format!("config: {e:#}")),
    }

    problems.extend(check_integrity().into_iter().map(|p| format!("catalog: {p}")));
    problems.extend(check_coverage().into_iter().map(|p| format!("rules: {p}")));
    problems.extend(
        referenced_ids()
            .filter(|id| find_strength(id).is_none())
            .map(|id| format!("conflicts: unknown strength id '{id}'")),
    );

    if problems.is_empty() {
        info!("All checks passed");
        return Ok(());
    }

    for problem in &problems {
        error!("{problem}");
    }
    bail!("{} problem(s) found", problems.len())
}
