//! Normalized `{ ok, data }` response shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// The result of one JSON call: the transport success flag and the parsed
/// body.
///
/// `ok` is reported as-is; no status interpretation happens here. A failed
/// call whose body is still JSON (an error document, say) yields
/// `ok == false` with that document in `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// True when the transport reported success (status 200..=299)
    pub ok: bool,
    /// Parsed response body
    pub data: Value,
}

impl ResponseEnvelope {
    /// Creates a new envelope.
    #[must_use]
    pub const fn new(ok: bool, data: Value) -> Self {
        Self { ok, data }
    }

    /// Splits the envelope into `Ok(data)` or `Err(data)` by the success flag.
    ///
    /// # Errors
    ///
    /// Returns the body as the error value when `ok` is false.
    pub fn into_result(self) -> Result<Value, Value> {
        if self.ok { Ok(self.data) } else { Err(self.data) }
    }

    /// Decodes `data` into a typed value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Decode` if the data does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> DomainResult<T> {
        T::deserialize(&self.data).map_err(|e| DomainError::Decode(e.to_string()))
    }
}
