// =============================================================================
// Admin Backend - Configuration
// =============================================================================

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1:7000")
    pub bind_address: String,

    /// Base URL of the external backend, without trailing slash
    pub backend_url: String,

    /// Cookie carrying the credential forwarded as a bearer token
    pub token_cookie: String,

    /// Artificial latency of the mock endpoints
    pub mock_delay: Duration,

    /// Timeout for one outbound request
    pub upstream_timeout: Duration,

    /// Built frontend served for every non-API path
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend_url = var("BACKEND_URL").ok_or(ConfigError::Missing("BACKEND_URL"))?;

        Ok(Self {
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:7000".into()),
            backend_url: backend_url.trim().trim_end_matches('/').to_string(),
            token_cookie: var("TOKEN_COOKIE").unwrap_or_else(|| "access_token".into()),
            mock_delay: Duration::from_millis(parse(&var, "MOCK_DELAY_MS", 1000)?),
            upstream_timeout: Duration::from_secs(parse(&var, "UPSTREAM_TIMEOUT_SECS", 30)?),
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        })
    }
}

fn parse<F>(var: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
