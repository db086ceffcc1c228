//! Location port

use std::sync::Arc;

/// Port for reading the current location hash.
///
/// The hash includes its leading `#` when non-empty and is the empty
/// string otherwise.
pub trait LocationProvider: Send + Sync {
    /// Returns the current hash fragment.
    fn hash(&self) -> String;
}

impl<L: LocationProvider + ?Sized> LocationProvider for Arc<L> {
    fn hash(&self) -> String {
        (**self).hash()
    }
}
