//! SureTax client configuration.
//!
//! Holds the two endpoint URLs (tax calculation and cancellation) and the
//! transport timeouts. Override via environment variables or explicit
//! construction for staging/testing.

use std::time::Duration;

use url::Url;

use crate::transport::TransportSettings;

/// Default overall request timeout in seconds (five minutes).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Default idle-connection lifetime in seconds.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the SureTax service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuretaxConfig {
    /// Tax calculation POST endpoint.
    pub url: Url,
    /// Transaction cancellation POST endpoint.
    pub cancel_url: Url,
    /// Overall timeout applied to each request, in seconds.
    pub request_timeout_secs: u64,
    /// How long an idle pooled connection is kept, in seconds.
    pub idle_timeout_secs: u64,
}

impl SuretaxConfig {
    /// Create a configuration with default timeouts.
    pub fn new(url: Url, cancel_url: Url) -> Self {
        Self {
            url,
            cancel_url,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            idle_timeout_secs: DEFAULT_IDLE_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SURETAX_URL` (required)
    /// - `SURETAX_CANCEL_URL` (required)
    /// - `SURETAX_TIMEOUT_SECS` (default: 300)
    /// - `SURETAX_IDLE_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            required_url("SURETAX_URL")?,
            required_url("SURETAX_CANCEL_URL")?,
        )
        .with_env_timeouts())
    }

    /// Apply `SURETAX_TIMEOUT_SECS` and `SURETAX_IDLE_TIMEOUT_SECS` when set.
    /// Unset or unparsable values leave the current timeouts in place.
    pub fn with_env_timeouts(mut self) -> Self {
        self.request_timeout_secs = env_u64("SURETAX_TIMEOUT_SECS", self.request_timeout_secs);
        self.idle_timeout_secs = env_u64("SURETAX_IDLE_TIMEOUT_SECS", self.idle_timeout_secs);
        self
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// The tax endpoint is the server root; cancellation is `{base}/cancel`.
    pub fn local_mock(base: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base)
            .map_err(|e| ConfigError::InvalidUrl(base.to_string(), e.to_string()))?;
        let cancel_url = url
            .join("cancel")
            .map_err(|e| ConfigError::InvalidUrl(base.to_string(), e.to_string()))?;
        Ok(Self {
            url,
            cancel_url,
            request_timeout_secs: 5,
            idle_timeout_secs: 1,
        })
    }

    /// Settings handed to the transport factory when the default transport
    /// is constructed.
    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
        }
    }
}

fn required_url(var: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).map_err(|_| ConfigError::MissingVar(var.to_string()))?;
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

fn env_u64(var: &str, default: u64) -> u64 {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(String),
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
