//! Request descriptor handed to a transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Headers, HttpMethod, RequestMode};

/// Media type sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Everything a transport needs to issue one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Cross-origin mode
    #[serde(default)]
    pub mode: RequestMode,
    /// Target URL, taken as given
    pub url: String,
    /// Request headers
    #[serde(default)]
    pub headers: Headers,
    /// Serialized JSON body, present only for POST
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl FetchRequest {
    /// Builds a JSON POST. The body is the serialized form of `data`.
    ///
    /// `Authorization` is set to `token` verbatim when one is given and is
    /// absent otherwise.
    #[must_use]
    pub fn post(url: impl Into<String>, data: &Value, token: Option<&str>) -> Self {
        Self::post_raw(url, data.to_string(), token)
    }

    /// Builds a JSON POST from an already serialized body.
    #[must_use]
    pub fn post_raw(url: impl Into<String>, body: String, token: Option<&str>) -> Self {
        Self {
            method: HttpMethod::Post,
            mode: RequestMode::Cors,
            url: url.into(),
            headers: json_headers(token),
            body: Some(body),
        }
    }

    /// Builds a JSON GET without a body.
    #[must_use]
    pub fn get(url: impl Into<String>, token: Option<&str>) -> Self {
        Self {
            method: HttpMethod::Get,
            mode: RequestMode::Cors,
            url: url.into(),
            headers: json_headers(token),
            body: None,
        }
    }

    /// Overrides the request mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: RequestMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the `Authorization` header value, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get("Authorization")
    }
}

fn json_headers(token: Option<&str>) -> Headers {
    let mut headers = Headers::new();
    headers.set("Content-Type", CONTENT_TYPE_JSON);
    if let Some(token) = token {
        headers.set("Authorization", token);
    }
    headers
}
