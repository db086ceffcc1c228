//! fetchroute Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod config;

pub use adapters::{
    LocationError, ReqwestResponse, ReqwestTransport, SharedLocation, StaticLocation, UrlLocation,
};
pub use config::ClientConfig;
