//! Client configuration for the identity service.
//!
//! Configuration is supplied by the operator, not derived: a base URL,
//! a bearer token, and a request timeout. `from_env` reads the
//! conventional environment variables; tests construct the struct
//! directly against a mock server.

use url::Url;
use zeroize::Zeroizing;

/// Environment variable holding the identity service base URL.
pub const ENV_SERVICE_URL: &str = "IDV_SERVICE_URL";
/// Environment variable holding the bearer token.
pub const ENV_AUTH_TOKEN: &str = "IDV_AUTH_TOKEN";
/// Environment variable overriding the request timeout (seconds).
pub const ENV_TIMEOUT_SECS: &str = "IDV_TIMEOUT_SECS";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable {name}")]
    MissingVar { name: &'static str },

    /// A URL value could not be parsed.
    #[error("invalid URL in {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// A numeric value could not be parsed.
    #[error("invalid number in {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },

    /// The bearer token cannot be used as an HTTP header value.
    #[error("bearer token contains invalid header characters")]
    InvalidToken,
}

/// Connection settings for the identity service.
#[derive(Debug, Clone)]
pub struct IdvApiConfig {
    /// Base URL of the identity service API (e.g. `https://dot.example.com/identity/api/v1`).
    pub base_url: Url,
    /// Bearer token for service authentication.
    pub api_token: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl IdvApiConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: Url, api_token: impl Into<String>) -> Self {
        Self {
            base_url,
            api_token: Zeroizing::new(api_token.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from the `IDV_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = read_var(ENV_SERVICE_URL)?;
        let base_url = raw_url.parse().map_err(|source| ConfigError::InvalidUrl {
            name: ENV_SERVICE_URL,
            source,
        })?;
        let api_token = Zeroizing::new(read_var(ENV_AUTH_TOKEN)?);

        let timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(value) if !value.is_empty() => {
                value
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        name: ENV_TIMEOUT_SECS,
                        value,
                    })?
            }
            _ => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_token,
            timeout_secs,
        })
    }
}

fn read_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar { name }),
    }
}
