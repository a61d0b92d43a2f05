//! Error types for the Grafana client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the dashboard management API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: connect, DNS, TLS or timeout. No HTTP response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server never answered within the readiness deadline.
    #[error("{url} did not become ready within {timeout:?}")]
    ReadinessTimeout { url: String, timeout: Duration },

    /// The server answered with a status outside the expected success set.
    #[error("API request failed ({status}) at {url}: {body}")]
    ApiRequestFailed {
        status: u16,
        url: String,
        body: String,
    },

    /// A success response lacked a field the caller depends on.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Post-creation health probe of a data source did not pass.
    #[error("Connectivity check failed for data source '{name}': {detail}")]
    ConnectivityCheckFailed { name: String, detail: String },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error is a transport failure rather than an HTTP status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Status code of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short detail suitable for a one-line summary.
    ///
    /// For API failures this is the raw server body, which is what operators
    /// need to diagnose a rejected payload.
    pub fn detail(&self) -> String {
        match self {
            Self::ApiRequestFailed { status, body, .. } if body.trim().is_empty() => {
                format!("HTTP {status}")
            }
            Self::ApiRequestFailed { status, body, .. } => format!("HTTP {status}: {}", body.trim()),
            other => other.to_string(),
        }
    }
}
