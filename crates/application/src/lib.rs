//! fetchroute Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits for the transport and the ambient location
//! - The JSON client helper and hash router use cases
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{FetchError, FetchResult};
pub use ports::{LocationProvider, Transport, TransportResponse};
pub use use_cases::{HashRouter, JsonApi};
