use crate::advisory_scan::domain::{AdvisoryResult, SoftwareVersion};
use crate::shared::Result;

/// AdvisoryLookupPort - resolves High/Critical advisory counts for a version
///
/// Implemented by the advisory poller and by the caching decorator that
/// wraps it, so the spreadsheet use case never knows whether a value came
/// from the API or from memory.
pub trait AdvisoryLookupPort {
    /// Looks up advisory counts for a single software version
    ///
    /// # Errors
    /// Returns an error if:
    /// - The access token cannot be obtained
    /// - A transport failure occurs while talking to the API
    /// - A successful response cannot be parsed
    fn lookup(&self, version: &SoftwareVersion) -> Result<AdvisoryResult>;
}

impl<L: AdvisoryLookupPort + ?Sized> AdvisoryLookupPort for &L {
    fn lookup(&self, version: &SoftwareVersion) -> Result<AdvisoryResult> {
        (**self).lookup(version)
    }
}
