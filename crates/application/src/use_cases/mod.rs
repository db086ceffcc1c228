//! Use cases
//!
//! Each use case orchestrates one or more ports to perform a client-side
//! operation.

mod hash_router;
mod json_api;

pub use hash_router::HashRouter;
pub use json_api::JsonApi;
