//! Application error types

use thiserror::Error;

/// Failures surfaced by the JSON client helper.
///
/// Status codes are never turned into errors; a non-2xx response with a
/// JSON body is a successful call with `ok == false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The URL is empty or cannot be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Host name resolution failed.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host that failed to resolve
        host: String,
        /// Underlying error message
        message: String,
    },

    /// The remote end refused the connection.
    #[error("connection refused: {host}:{port}")]
    ConnectionRefused {
        /// Target host
        host: String,
        /// Target port
        port: u16,
    },

    /// The connection could not be established or broke mid-request.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// A header value could not be sent, e.g. a token with control characters.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The response body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    /// A typed request payload could not be serialized.
    #[error("cannot serialize request body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Returns true if the request went out but its body was not JSON.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidJson(_))
    }

    /// Returns true if the failure happened before a response arrived.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_)
                | Self::InvalidHeader(_)
                | Self::Dns { .. }
                | Self::ConnectionRefused { .. }
                | Self::ConnectionFailed(_)
                | Self::Other(_)
        )
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidJson(error.to_string())
    }
}

/// Result type alias for client operations.
pub type FetchResult<T> = Result<T, FetchError>;
