//! Hash-fragment routing.
//!
//! A location hash such as `#/users?id=5&tab=votes` carries a route path
//! (`users`) and a flat query (`id=5`, `tab=votes`). Splitting is naive:
//! no percent-decoding and no validation, so malformed input produces a
//! degenerate value instead of an error.

mod path;
mod query;

pub use path::{HashRoute, hash_path};
pub use query::{QueryMap, parse_query};

/// Trims whitespace the way browsers do, which also strips the byte order
/// mark (U+FEFF) that `str::trim` keeps.
fn trim_hash(hash: &str) -> &str {
    hash.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
