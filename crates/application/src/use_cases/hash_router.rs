//! Hash-route parser use case.

use fetchroute_domain::{HashRoute, QueryMap, hash_path, parse_query};

use crate::ports::LocationProvider;

/// Reads the ambient location hash and derives route values from it.
///
/// Every call reads the location afresh, so results follow navigation.
pub struct HashRouter<L: LocationProvider> {
    location: L,
}

impl<L: LocationProvider> HashRouter<L> {
    /// Creates a router over the given location.
    pub const fn new(location: L) -> Self {
        Self { location }
    }

    /// Returns the current query map.
    ///
    /// See [`parse_query`] for the splitting rules.
    #[must_use]
    pub fn parse_query(&self) -> QueryMap {
        parse_query(&self.location.hash())
    }

    /// Returns the current route path.
    ///
    /// See [`hash_path`] for the stripping rules.
    #[must_use]
    pub fn get_hash_path(&self) -> String {
        hash_path(&self.location.hash())
    }

    /// Returns path and query from a single read of the location.
    #[must_use]
    pub fn route(&self) -> HashRoute {
        HashRoute::parse(&self.location.hash())
    }
}
