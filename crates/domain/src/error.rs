//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building or reading values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The response data could not be decoded into the requested type.
    #[error("cannot decode response data: {0}")]
    Decode(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
