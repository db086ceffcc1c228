//! JSON client helper use case.

use std::sync::Arc;

use fetchroute_domain::{FetchRequest, ResponseEnvelope};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::ports::{Transport, TransportResponse};
use crate::{FetchError, FetchResult};

/// Use case for JSON POST/GET calls with an optional verbatim
/// `Authorization` token.
///
/// Every call issues exactly one request through the `Transport` port,
/// waits for the response, then waits for its JSON body. Transport and
/// parse failures are returned unchanged; nothing is retried.
///
/// # Example
///
/// ```ignore
/// let api = JsonApi::new(Arc::new(ReqwestTransport::new()?));
///
/// let created = api.post_data("https://api.example.com/poll", Some(&body), Some(&token)).await?;
/// if created.ok {
///     println!("{}", created.data);
/// }
/// ```
pub struct JsonApi<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for JsonApi<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> JsonApi<T> {
    /// Creates a new `JsonApi` over the given transport.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Sends `data` as a JSON POST to `url`.
    ///
    /// Without `data` the body is `{}`. With a `token`, the
    /// `Authorization` header carries it verbatim.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the call fails and
    /// `FetchError::InvalidJson` if the response body is not JSON.
    pub async fn post_data(
        &self,
        url: &str,
        data: Option<&Value>,
        token: Option<&str>,
    ) -> FetchResult<ResponseEnvelope> {
        let request = match data {
            Some(data) => FetchRequest::post(url, data, token),
            None => FetchRequest::post(url, &Value::Object(Map::new()), token),
        };
        self.send(request).await
    }

    /// Serializes `body` and sends it as a JSON POST to `url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidBody` without sending anything if `body`
    /// cannot be serialized; otherwise fails like [`Self::post_data`].
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        token: Option<&str>,
    ) -> FetchResult<ResponseEnvelope> {
        let body = serde_json::to_string(body).map_err(|e| FetchError::InvalidBody(e.to_string()))?;
        self.send(FetchRequest::post_raw(url, body, token)).await
    }

    /// Sends a JSON GET to `url`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the call fails and
    /// `FetchError::InvalidJson` if the response body is not JSON.
    pub async fn get_data(&self, url: &str, token: Option<&str>) -> FetchResult<ResponseEnvelope> {
        self.send(FetchRequest::get(url, token)).await
    }

    async fn send(&self, request: FetchRequest) -> FetchResult<ResponseEnvelope> {
        debug!(
            method = %request.method,
            mode = %request.mode,
            url = %request.url,
            authorized = request.authorization().is_some(),
            "sending JSON request"
        );

        let response = self.transport.fetch(request).await?;
        let ok = response.ok();
        let status = response.status();
        let data = response.json().await?;

        debug!(ok, status, "received JSON response");
        Ok(ResponseEnvelope::new(ok, data))
    }
}
