//! Console Configuration Settings
//!
//! Configuration types for the console, loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::rag::{DEFAULT_CHAT_MODEL, find_model};
use crate::infrastructure::backend::{ApiConfig, DEFAULT_TIMEOUT};

/// Backend base URL (required).
pub const ENV_API_URL: &str = "PLATFORM_API_URL";
/// Per-request timeout in seconds.
pub const ENV_HTTP_TIMEOUT_SECS: &str = "PLATFORM_HTTP_TIMEOUT_SECS";
/// Session file location.
pub const ENV_SESSION_FILE: &str = "PLATFORM_SESSION_FILE";
/// Chat model used when none is given.
pub const ENV_DEFAULT_MODEL: &str = "PLATFORM_DEFAULT_MODEL";
/// Any non-empty value disables ANSI colors.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Session file used when `PLATFORM_SESSION_FILE` is unset.
pub const DEFAULT_SESSION_FILE: &str = ".platform-console/session.json";

/// Complete console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Backend client settings.
    pub api: ApiConfig,
    /// Where the login session is kept.
    pub session_file: PathBuf,
    /// Chat model used when none is given.
    pub default_model: String,
    /// Whether tables may use ANSI colors.
    pub color: bool,
}

impl ConsoleConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PLATFORM_API_URL` is missing, empty or not an
    /// http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url =
            lookup(ENV_API_URL).ok_or_else(|| ConfigError::MissingEnvVar(ENV_API_URL.to_string()))?;
        if api_url.trim().is_empty() {
            return Err(ConfigError::EmptyValue(ENV_API_URL.to_string()));
        }

        let timeout = parse_duration_secs(&lookup, ENV_HTTP_TIMEOUT_SECS, DEFAULT_TIMEOUT);
        let api = ApiConfig::new(&api_url)
            .map_err(|e| ConfigError::InvalidValue {
                key: ENV_API_URL.to_string(),
                message: e.to_string(),
            })?
            .with_timeout(timeout);

        let session_file = lookup(ENV_SESSION_FILE)
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        let default_model = match lookup(ENV_DEFAULT_MODEL).filter(|v| !v.trim().is_empty()) {
            Some(model) if find_model(model.trim()).is_some() => model.trim().to_string(),
            Some(model) => {
                tracing::warn!(
                    model = %model,
                    fallback = DEFAULT_CHAT_MODEL,
                    "unknown default model, using fallback"
                );
                DEFAULT_CHAT_MODEL.to_string()
            }
            None => DEFAULT_CHAT_MODEL.to_string(),
        };

        let color = lookup(ENV_NO_COLOR).is_none_or(|v| v.is_empty());

        Ok(Self {
            api,
            session_file,
            default_model,
            color,
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// Environment variable is set but unusable.
    #[error("environment variable {key} is invalid: {message}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Why it was rejected.
        message: String,
    },
}

fn parse_duration_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Duration {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map_or(default, Duration::from_secs)
}
