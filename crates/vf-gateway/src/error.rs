//! Gateway error types.

use thiserror::Error;
use vf_core::FailureKind;

/// Errors that can occur when talking to the classifier gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway returned a non-success status code.
    #[error("gateway error ({status}): {message}")]
    Status {
        /// HTTP status code returned by the gateway.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// No response arrived before the deadline.
    #[error("gateway timed out after {secs}s")]
    Timeout {
        /// Deadline that elapsed, in seconds.
        secs: u64,
    },

    /// The structured contract returned a body that does not parse.
    #[error("malformed gateway response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Collapse into the failure taxonomy surfaced to users.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Http(error) if error.is_timeout() => FailureKind::GatewayTimeout,
            Self::Http(_) | Self::Status { .. } => FailureKind::GatewayUnreachable,
            Self::Timeout { .. } => FailureKind::GatewayTimeout,
            Self::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }
}
