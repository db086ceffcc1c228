//! Infrastructure adapters

mod location;
mod reqwest_transport;

pub use location::{LocationError, SharedLocation, StaticLocation, UrlLocation};
pub use reqwest_transport::{ReqwestResponse, ReqwestTransport};
