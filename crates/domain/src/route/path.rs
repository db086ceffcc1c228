//! Route path extracted from a location hash.

use serde::{Deserialize, Serialize};

use super::query::{QueryMap, parse_query};
use super::trim_hash;

/// Returns the route path of a location hash.
///
/// The hash is trimmed, a single leading `#/` is removed if present, and
/// everything from the first `?` on is dropped. `#/users?id=5` gives
/// `users`, `#/` gives the empty string.
#[must_use]
pub fn hash_path(hash: &str) -> String {
    let trimmed = trim_hash(hash);
    let route = trimmed.strip_prefix("#/").unwrap_or(trimmed);
    route
        .split_once('?')
        .map_or(route, |(path, _)| path)
        .to_string()
}

/// Path and query parsed from the same hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRoute {
    /// Route path, see [`hash_path`]
    pub path: String,
    /// Query entries, see [`parse_query`]
    pub query: QueryMap,
}

impl HashRoute {
    /// Parses both parts of `hash`.
    #[must_use]
    pub fn parse(hash: &str) -> Self {
        Self {
            path: hash_path(hash),
            query: parse_query(hash),
        }
    }

    /// Returns a query value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }
}
