/// Application services implementing the advisory lookup port
mod advisory_poller;
mod caching_advisory_lookup;
mod offline_lookup;

pub use advisory_poller::AdvisoryPoller;
pub use caching_advisory_lookup::CachingAdvisoryLookup;
pub use offline_lookup::OfflineLookup;
