use std::time::Duration;

use axum::http::HeaderValue;
use dxm_ai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use dxm_ai::AiConfig;

/// Headroom left between the AI client timeout and the request timeout so a
/// hung gateway is reported by the client before the server gives up.
pub const AI_TIMEOUT_MARGIN_SECS: u64 = 5;

/// A configuration value was present but unusable.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. The storage
/// backend and the AI gateway are chosen here, once, by the presence of
/// `DATABASE_URL` and `OPENAI_API_KEY`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Hosted model settings. `None` when no API key is configured.
    pub ai: Option<AiConfig>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `HOST`                 | `0.0.0.0`                     |
    /// | `PORT`                 | `5000`                        |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                          |
    /// | `DATABASE_URL`         | unset (in-memory store)       |
    /// | `OPENAI_API_KEY`       | unset (AI endpoints disabled) |
    /// | `OPENAI_MODEL`         | `gpt-4o`                      |
    /// | `OPENAI_BASE_URL`      | `https://api.openai.com/v1`   |
    /// | `AI_TIMEOUT_SECS`      | request timeout - 5, max `30` |
    ///
    /// `AI_TIMEOUT_SECS` must be shorter than `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or("PORT", get("PORT"), 5000)?;
        let request_timeout_secs: u64 = parse_or("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS"), 30)?;

        let cors_origins: Vec<String> = get("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            HeaderValue::from_str(origin).map_err(|e| ConfigError {
                var: "CORS_ORIGINS",
                value: origin.clone(),
                reason: e.to_string(),
            })?;
        }

        let database_url = get("DATABASE_URL");

        let ai = match get("OPENAI_API_KEY") {
            Some(api_key) => {
                let default_timeout = DEFAULT_TIMEOUT_SECS
                    .min(request_timeout_secs.saturating_sub(AI_TIMEOUT_MARGIN_SECS))
                    .max(1);
                let raw_timeout = get("AI_TIMEOUT_SECS");
                let timeout_secs = parse_or("AI_TIMEOUT_SECS", raw_timeout.clone(), default_timeout)?;
                if timeout_secs == 0 || timeout_secs >= request_timeout_secs {
                    return Err(ConfigError {
                        var: "AI_TIMEOUT_SECS",
                        value: raw_timeout.unwrap_or_else(|| timeout_secs.to_string()),
                        reason: format!(
                            "must be between 1 and {} (below REQUEST_TIMEOUT_SECS)",
                            request_timeout_secs.saturating_sub(1)
                        ),
                    });
                }
                Some(AiConfig {
                    api_key,
                    base_url: get("OPENAI_BASE_URL")
                        .map(|u| u.trim_end_matches('/').to_string())
                        .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
                    model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            ai,
        })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}
