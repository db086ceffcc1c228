//! Request mode, as understood by browser-style fetch transports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cross-origin policy requested for a call.
///
/// Native transports have no same-origin policy and only carry this value
/// through; browser transports map it onto the fetch `mode` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RequestMode {
    /// Cross-origin requests allowed, subject to CORS.
    #[default]
    Cors,
    /// Only same-origin requests allowed.
    SameOrigin,
    /// Opaque cross-origin request.
    NoCors,
}

impl RequestMode {
    /// Returns the mode as its fetch option string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cors => "cors",
            Self::SameOrigin => "same-origin",
            Self::NoCors => "no-cors",
        }
    }
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
