//! Transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port using the reqwest library.
//! It issues exactly one request per call: no retries and no timeout.

use std::error::Error as _;
use std::future::Future;

use fetchroute_application::{FetchError, FetchResult, Transport, TransportResponse};
use fetchroute_domain::{FetchRequest, HttpMethod};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;

/// Transport implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `Transport` port from the
/// application layer.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Option<Url>,
}

impl ReqwestTransport {
    /// Creates a transport with the default [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> FetchResult<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Creates a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn from_config(config: &ClientConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Creates a transport with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Sets the base URL that relative request URLs are joined onto.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    /// Resolves the request URL, against the base URL if one is set.
    fn resolve_url(&self, url: &str) -> FetchResult<Url> {
        let parsed = match &self.base_url {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        parsed.map_err(|e| FetchError::InvalidUrl(format!("{e}: {url:?}")))
    }

    /// Maps reqwest errors to `FetchError`.
    fn map_error(error: &reqwest::Error) -> FetchError {
        let message = error_chain(error);

        if error.is_connect() {
            let lower = message.to_lowercase();
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();

            if lower.contains("dns") || lower.contains("resolve") {
                return FetchError::Dns { host, message };
            }
            if lower.contains("refused") {
                return FetchError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return FetchError::ConnectionFailed(message);
        }

        // The URL was already checked by `resolve_url`, so a builder error
        // here comes from a header that failed to parse.
        if error.is_builder() {
            return FetchError::InvalidHeader(message);
        }

        if error.is_request() {
            return FetchError::ConnectionFailed(message);
        }

        FetchError::Other(message)
    }
}

/// Joins an error and its sources, since reqwest keeps the useful detail
/// (e.g. "Connection refused") in the source chain.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl Transport for ReqwestTransport {
    type Response = ReqwestResponse;

    fn fetch(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = FetchResult<Self::Response>> + Send {
        async move {
            let url = self.resolve_url(&request.url)?;

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(request.method), url);

            for header in request.headers.iter() {
                builder = builder.header(&header.name, &header.value);
            }

            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| {
                let error = Self::map_error(&e);
                debug!(%error, "transport call failed");
                error
            })?;

            Ok(ReqwestResponse { response })
        }
    }
}

/// A reqwest response whose body has not been read yet.
#[derive(Debug)]
pub struct ReqwestResponse {
    response: reqwest::Response,
}

impl TransportResponse for ReqwestResponse {
    fn ok(&self) -> bool {
        self.response.status().is_success()
    }

    fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    fn json(self) -> impl Future<Output = FetchResult<Value>> + Send {
        async move {
            let bytes = self
                .response
                .bytes()
                .await
                .map_err(|e| FetchError::Body(error_chain(&e)))?;

            Ok(serde_json::from_slice(&bytes)?)
        }
    }
}
