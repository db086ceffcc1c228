//! Transport port

use std::future::Future;

use fetchroute_domain::FetchRequest;
use serde_json::Value;

use crate::FetchResult;

/// Port for issuing a single HTTP call.
///
/// This trait abstracts the fetch-like capability, allowing the client
/// helper to be independent of specific HTTP libraries. Implementations
/// must not retry, cache or time out on their own.
pub trait Transport: Send + Sync {
    /// Response type produced by this transport.
    type Response: TransportResponse;

    /// Sends the request and resolves once response headers arrive.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the request could not be
    /// delivered.
    fn fetch(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = FetchResult<Self::Response>> + Send;
}

/// A response whose body has not been read yet.
pub trait TransportResponse: Send {
    /// Returns true for a 2xx status.
    fn ok(&self) -> bool;

    /// Returns the numeric status code.
    fn status(&self) -> u16;

    /// Reads the body and parses it as JSON.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Body` if reading fails and
    /// `FetchError::InvalidJson` if the body is not JSON.
    fn json(self) -> impl Future<Output = FetchResult<Value>> + Send;
}
