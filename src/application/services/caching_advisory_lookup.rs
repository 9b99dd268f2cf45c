use crate::advisory_scan::domain::{AdvisoryResult, SoftwareVersion};
use crate::ports::inbound::AdvisoryLookupPort;
use crate::shared::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingAdvisoryLookup wraps an AdvisoryLookupPort and adds in-memory caching.
///
/// This implements the decorator pattern: the first lookup of a version
/// goes to the inner lookup, every later lookup of the same version is
/// answered from memory. Only successful results are cached. The cache
/// lives for one run and has no eviction.
pub struct CachingAdvisoryLookup<L: AdvisoryLookupPort> {
    inner: L,
    cache: Arc<DashMap<SoftwareVersion, AdvisoryResult>>,
}

impl<L: AdvisoryLookupPort> CachingAdvisoryLookup<L> {
    /// Creates a new caching lookup wrapping the given inner lookup
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Number of distinct versions cached so far
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: AdvisoryLookupPort> AdvisoryLookupPort for CachingAdvisoryLookup<L> {
    fn lookup(&self, version: &SoftwareVersion) -> Result<AdvisoryResult> {
        if let Some(cached) = self.cache.get(version) {
            return Ok(*cached);
        }

        let result = self.inner.lookup(version)?;
        self.cache.insert(version.clone(), result);

        Ok(result)
    }
}
