//! Client configuration.

use serde::{Deserialize, Serialize};
use url::Url;

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("fetchroute/", env!("CARGO_PKG_VERSION"));

/// Default redirect limit.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Settings for building a [`ReqwestTransport`](crate::ReqwestTransport).
///
/// Meant to be embedded in the host application's own configuration;
/// every field has a default so partial documents deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Base that relative request URLs are joined onto. Without it URLs
    /// are used verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<Url>,
    /// Maximum number of redirects followed
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the base URL for relative request URLs.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the redirect limit.
    #[must_use]
    pub const fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}
