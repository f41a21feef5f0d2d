//! SureTax client error types.

use crate::transport::TransportError;

/// Errors from SureTax API calls.
///
/// Every variant carries the endpoint label of the call that failed so
/// callers can tell a tax submission failure from a cancellation failure.
#[derive(Debug, thiserror::Error)]
pub enum SuretaxError {
    /// The typed request could not be serialized into the wire envelope.
    #[error("failed to encode request for {endpoint}: {source}")]
    Encoding {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Connection, DNS, TLS or timeout failure reported by the transport.
    #[error("HTTP error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: TransportError,
    },
    /// The service answered with anything other than HTTP 200.
    #[error("SureTax {endpoint} returned {status_line}")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        status_line: String,
    },
    /// The outer `{"d": ...}` wrapper was not valid JSON.
    #[error("response wrapper unmarshal failed for {endpoint}: {source}")]
    EnvelopeUnmarshal {
        endpoint: String,
        source: serde_json::Error,
    },
    /// The payload inside the wrapper (or the bare cancel body) was not a
    /// valid response document.
    #[error("response unmarshal failed for {endpoint}: {source}")]
    PayloadUnmarshal {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl SuretaxError {
    /// Whether the failure is plausibly transient and worth retrying.
    ///
    /// Only transport failures qualify. A non-200 status or an undecodable
    /// body will not change on resubmission.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// HTTP status code, when the failure was a non-200 response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
