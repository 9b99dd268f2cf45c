use crate::ports::outbound::Clock;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Request ceilings enforced by [`RateLimiter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_per_second: usize,
    pub max_per_minute: usize,
}

impl RateLimitPolicy {
    pub const BURST_WINDOW: Duration = Duration::from_secs(1);
    pub const MINUTE_WINDOW: Duration = Duration::from_secs(60);

    pub fn new(max_per_second: usize, max_per_minute: usize) -> Self {
        Self {
            max_per_second,
            max_per_minute,
        }
    }
}

impl Default for RateLimitPolicy {
    /// openVuln API allowance: 5 requests/second, 30 requests/minute
    fn default() -> Self {
        Self::new(5, 30)
    }
}

/// RateLimiter keeps a trailing log of request timestamps and blocks the
/// caller until another request fits under both ceilings.
///
/// The per-minute and per-second checks are both evaluated against the log
/// as it was before any waiting, and their waits are served back to back.
/// A call that trips both limits therefore waits for the sum of the two.
pub struct RateLimiter<C: Clock> {
    clock: C,
    policy: RateLimitPolicy,
    timestamps: RefCell<VecDeque<Instant>>,
}

impl<C: Clock> RateLimiter<C> {
    pub fn new(clock: C, policy: RateLimitPolicy) -> Self {
        Self {
            clock,
            policy,
            timestamps: RefCell::new(VecDeque::new()),
        }
    }

    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Waits (if needed) and records one outbound request.
    ///
    /// # Returns
    /// Total time spent waiting
    pub fn acquire(&self) -> Duration {
        let now = self.clock.now();
        let (minute_wait, burst_wait) = self.pending_waits(now);

        let mut waited = Duration::ZERO;
        for wait in [minute_wait, burst_wait].into_iter().flatten() {
            if !wait.is_zero() {
                self.clock.sleep(wait);
                waited += wait;
            }
        }

        self.timestamps.borrow_mut().push_back(self.clock.now());
        waited
    }

    /// Number of requests currently inside the one-minute window
    pub fn recorded(&self) -> usize {
        self.timestamps.borrow().len()
    }

    fn pending_waits(&self, now: Instant) -> (Option<Duration>, Option<Duration>) {
        let mut log = self.timestamps.borrow_mut();

        while let Some(&oldest) = log.front() {
            if now.saturating_duration_since(oldest) > RateLimitPolicy::MINUTE_WINDOW {
                log.pop_front();
            } else {
                break;
            }
        }

        let minute_wait = if log.len() >= self.policy.max_per_minute {
            log.front().map(|&oldest| {
                RateLimitPolicy::MINUTE_WINDOW.saturating_sub(now.saturating_duration_since(oldest))
            })
        } else {
            None
        };

        let last_second = log
            .iter()
            .filter(|&&t| now.saturating_duration_since(t) < RateLimitPolicy::BURST_WINDOW)
            .count();
        let burst_wait =
            (last_second >= self.policy.max_per_second).then_some(RateLimitPolicy::BURST_WINDOW);

        (minute_wait, burst_wait)
    }
}
