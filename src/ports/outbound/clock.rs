use std::time::{Duration, Instant};

/// Clock port used by the rate limiter
///
/// Abstracts wall-clock reads and blocking sleeps so request pacing can
/// be exercised without real waiting.
pub trait Clock {
    fn now(&self) -> Instant;

    /// Blocks the current thread for `duration`
    fn sleep(&self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
