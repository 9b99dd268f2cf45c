mod rate_limiter;
mod severity_counter;

pub use rate_limiter::{RateLimitPolicy, RateLimiter};
pub use severity_counter::SeverityCounter;
