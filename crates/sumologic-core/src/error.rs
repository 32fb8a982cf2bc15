//! Error types for Sumo Logic API operations.
//!
//! The API reports failures with a JSON envelope of the form
//! `{"status": int, "code": string, "message": string}`. The decoded envelope
//! is kept on the error variant so callers can branch on the HTTP status or
//! the machine-readable code instead of matching message text.

use serde::Deserialize;
use thiserror::Error;

/// Decoded Sumo Logic error envelope.
///
/// Displays as the server's `message` field alone, so the text surfaced to a
/// caller matches what the API returned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// HTTP status reported in the body.
    pub status: u16,
    /// Machine-readable error code (e.g. `"partition:duplicate"`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Main error type for Sumo Logic API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The API rejected the request (status >= 400, excluding 404 and 409).
    #[error("{0}")]
    Api(ApiError),

    /// The API rejected a conditional update (HTTP 409, stale `If-Match`).
    ///
    /// Kept distinct from [`Error::Api`] so callers that want to re-read and
    /// retry can do so explicitly. The client itself never retries.
    #[error("{0}")]
    Conflict(ApiError),

    /// A resource required by the operation does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The failure body did not parse as the expected error envelope.
    ///
    /// The original HTTP status and raw body are retained for diagnostics
    /// rather than being discarded in favour of the parse error alone.
    #[error("unexpected error response (HTTP {status}): {source}")]
    UnexpectedBody {
        /// HTTP status of the failed response.
        status: u16,
        /// Raw response body.
        body: String,
        /// The envelope parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Successful response body did not parse as the expected type.
    #[error("failed to parse response for `{path}`: {source}")]
    ParseError {
        /// Request path the response belongs to.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The service could not be reached.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport-level failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// A path could not be resolved against the base URL.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// Configuration error (bad credentials, unknown deployment, out-of-range
    /// settings).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Specialized result type for Sumo Logic API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Construct the error for a failed response, decoding the envelope.
    ///
    /// 409 maps to [`Error::Conflict`]; every other status maps to
    /// [`Error::Api`]. A body that does not match the envelope shape yields
    /// [`Error::UnexpectedBody`] with the status and body preserved.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiError>(body) {
            Ok(envelope) if status == 409 => Self::Conflict(envelope),
            Ok(envelope) => Self::Api(envelope),
            Err(source) => Self::UnexpectedBody {
                status,
                body: body.to_string(),
                source,
            },
        }
    }

    /// HTTP status associated with this error, if the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(envelope) | Self::Conflict(envelope) => Some(envelope.status),
            Self::UnexpectedBody { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected a conditional update.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidPath(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}
