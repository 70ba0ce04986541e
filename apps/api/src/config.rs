use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Which backend answers `/api/generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    Mock,
    Anthropic,
}

impl AiProvider {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "mock" => Ok(AiProvider::Mock),
            "anthropic" | "claude" => Ok(AiProvider::Anthropic),
            other => bail!("AI_PROVIDER must be 'mock' or 'anthropic', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ai_provider: AiProvider,
    /// Only present (and required) when `ai_provider` is `Anthropic`.
    pub anthropic_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    /// Messages API host, overridable for proxies.
    pub anthropic_base_url: String,
    /// Browser origins allowed by CORS. Empty means any origin (local development).
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let ai_provider = AiProvider::parse(&optional_env("AI_PROVIDER").unwrap_or_default())?;

        let anthropic_api_key = match ai_provider {
            AiProvider::Anthropic => Some(require_env("ANTHROPIC_API_KEY")?),
            AiProvider::Mock => None,
        };

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            ai_provider,
            anthropic_api_key,
            llm_timeout_secs: optional_env("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            anthropic_base_url: optional_env("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cors_allowed_origins: parse_origins(
                &optional_env("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
        })
    }

    /// Mock-only configuration, used by tests and as a safe default.
    pub fn mock(port: u16) -> Self {
        Config {
            port,
            rust_log: "info".to_string(),
            ai_provider: AiProvider::Mock,
            anthropic_api_key: None,
            llm_timeout_secs: 30,
            anthropic_base_url: DEFAULT_BASE_URL.to_string(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

/// Comma-separated origins; `*` or nothing allows any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty() && *o != "*")
        .map(str::to_string)
        .collect()
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse_defaults_to_mock() {
        assert_eq!(AiProvider::parse("").unwrap(), AiProvider::Mock);
        assert_eq!(AiProvider::parse("MOCK").unwrap(), AiProvider::Mock);
    }

    #[test]
    fn test_provider_parse_accepts_anthropic_aliases() {
        assert_eq!(AiProvider::parse("anthropic").unwrap(), AiProvider::Anthropic);
        assert_eq!(AiProvider::parse(" Claude ").unwrap(), AiProvider::Anthropic);
    }

    #[test]
    fn test_provider_parse_rejects_unknown() {
        let err = AiProvider::parse("openai").unwrap_err();
        assert!(err.to_string().contains("openai"));
    }

    #[test]
    fn test_mock_config_has_no_key() {
        let config = Config::mock(3000);
        assert_eq!(config.port, 3000);
        assert!(config.anthropic_api_key.is_none());
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.anthropic_base_url, "https://api.anthropic.com");
    }

    #[test]
    fn test_parse_origins_splits_and_trims() {
        assert_eq!(
            parse_origins(" https://lens.example.com/ ,https://www.lens.example.com,,"),
            vec!["https://lens.example.com", "https://www.lens.example.com"]
        );
        assert!(parse_origins("").is_empty());
        assert!(parse_origins("*").is_empty());
    }
}
