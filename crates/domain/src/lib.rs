//! fetchroute Domain - Core types
//!
//! This crate defines the values that flow through the JSON client helper
//! and the hash-route parser. All types here are pure Rust with no I/O
//! dependencies.

pub mod error;
pub mod request;
pub mod response;
pub mod route;

pub use error::{DomainError, DomainResult};
pub use request::{FetchRequest, Header, Headers, HttpMethod, RequestMode};
pub use response::ResponseEnvelope;
pub use route::{HashRoute, QueryMap, hash_path, parse_query};
