//! Error types for the Proofguard API client.

use std::time::Duration;

use thiserror::Error;

use crate::api::types::ValidationResult;

/// Machine-readable error codes.
///
/// The string form ([`ErrorCode::as_str`]) is stable across SDK versions and
/// safe to log, persist or branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MissingCredential,
    InvalidCredential,
    ValidationFailed,
    ApiError,
    NetworkError,
    Timeout,
    MalformedResponse,
}

impl ErrorCode {
    /// Stable code string for this error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredential => "MISSING_CREDENTIAL",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::ApiError => "API_ERROR",
            Self::NetworkError => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::MalformedResponse => "MALFORMED_RESPONSE",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for all Proofguard client operations.
///
/// Every failure path produces exactly one of these variants; the client
/// never swallows an error or returns a partial result.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No API key was provided.
    #[error("API key is required")]
    MissingCredential,

    /// The API key does not start with the `pg_` prefix.
    #[error("API key must start with \"pg_\"")]
    InvalidCredential,

    /// The service judged the transaction unsafe (`safe == false`).
    ///
    /// This is a business rejection, not a transport failure: do not retry,
    /// abort the transaction instead.
    #[error("{reason}")]
    ValidationFailed {
        /// Service-provided explanation of the rejection.
        reason: String,
        /// The full result, for caller inspection.
        result: Box<ValidationResult>,
    },

    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the service's error body, or `HTTP <status>` when
        /// the body carried none.
        message: String,
    },

    /// Transport-level failure before a response arrived. Safe to retry
    /// with backoff.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// No response within the configured timeout. Safe to retry with
    /// backoff, possibly with a larger timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// A success response whose body does not match the documented shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingCredential => ErrorCode::MissingCredential,
            Self::InvalidCredential => ErrorCode::InvalidCredential,
            Self::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            Self::Api { .. } => ErrorCode::ApiError,
            Self::Network(_) => ErrorCode::NetworkError,
            Self::Timeout(_) => ErrorCode::Timeout,
            Self::MalformedResponse(_) => ErrorCode::MalformedResponse,
        }
    }

    /// HTTP status for [`ClientError::Api`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The attached result for [`ClientError::ValidationFailed`], `None`
    /// otherwise.
    pub fn validation_result(&self) -> Option<&ValidationResult> {
        match self {
            Self::ValidationFailed { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Error body shape returned by the API on non-success statuses.
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    /// Human-readable error message. The service uses `error` on most
    /// endpoints and `message` on a few older ones.
    #[serde(alias = "error")]
    pub message: Option<String>,
}
