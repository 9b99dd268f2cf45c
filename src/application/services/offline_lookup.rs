use crate::advisory_scan::domain::{AdvisoryResult, SoftwareVersion};
use crate::ports::inbound::AdvisoryLookupPort;
use crate::shared::Result;

/// OfflineLookup - stands in for the advisory poller when no network
/// access is wanted (dry-run mode). Every lookup fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLookup;

impl AdvisoryLookupPort for OfflineLookup {
    fn lookup(&self, version: &SoftwareVersion) -> Result<AdvisoryResult> {
        anyhow::bail!(
            "Advisory lookup for version {} requested while running offline",
            version
        )
    }
}
