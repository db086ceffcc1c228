//! Location provider adapters.

use std::sync::{Arc, PoisonError, RwLock};

use fetchroute_application::LocationProvider;
use thiserror::Error;
use url::Url;

/// Errors raised while building a location.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The location URL could not be parsed.
    #[error("invalid location URL: {0}")]
    InvalidUrl(String),
}

/// A location whose hash never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocation {
    hash: String,
}

impl StaticLocation {
    /// Creates a location with the given hash.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }
}

impl LocationProvider for StaticLocation {
    fn hash(&self) -> String {
        self.hash.clone()
    }
}

/// A location hash shared between the navigating side and its readers.
///
/// Clones observe the same hash; `navigate` on any clone is visible to all.
#[derive(Debug, Clone, Default)]
pub struct SharedLocation {
    hash: Arc<RwLock<String>>,
}

impl SharedLocation {
    /// Creates a shared location starting at `hash`.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: Arc::new(RwLock::new(hash.into())),
        }
    }

    /// Replaces the current hash.
    pub fn navigate(&self, hash: impl Into<String>) {
        let mut current = self.hash.write().unwrap_or_else(PoisonError::into_inner);
        *current = hash.into();
    }
}

impl LocationProvider for SharedLocation {
    fn hash(&self) -> String {
        self.hash
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A location derived from a full page URL.
///
/// The hash follows browser rules: `#` plus the fragment, or the empty
/// string when the URL has no fragment or an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlLocation {
    url: Url,
}

impl UrlLocation {
    /// Creates a location from a parsed URL.
    #[must_use]
    pub const fn new(url: Url) -> Self {
        Self { url }
    }

    /// Parses a page URL.
    ///
    /// # Errors
    ///
    /// Returns `LocationError::InvalidUrl` if `url` is not an absolute URL.
    pub fn parse(url: &str) -> Result<Self, LocationError> {
        Url::parse(url)
            .map(Self::new)
            .map_err(|e| LocationError::InvalidUrl(format!("{e}: {url:?}")))
    }

    /// Returns the page URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl LocationProvider for UrlLocation {
    fn hash(&self) -> String {
        match self.url.fragment() {
            Some(fragment) if !fragment.is_empty() => format!("#{fragment}"),
            _ => String::new(),
        }
    }
}
