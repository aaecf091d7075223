use crate::models::FingerprintSet;
use serde_json::Value;

/// A remote service that maps a fingerprint set to ranked version candidates.
pub trait VersionIdentifier {
    /// Submit the fingerprint set and return the raw response document.
    ///
    /// `None` means the service could not be reached or answered with a
    /// non-success status. Implementations log the cause themselves; callers
    /// treat it as "no answer", not as a failure.
    fn identify(&self, set: &FingerprintSet) -> Option<Value>;
}
