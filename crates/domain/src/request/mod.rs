//! HTTP request domain types

mod fetch;
mod header;
mod method;
mod mode;

pub use fetch::FetchRequest;
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use mode::RequestMode;
