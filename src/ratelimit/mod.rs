//! Request rate limiting

pub mod clock;
pub mod identity;
pub mod limiter;
pub mod profiles;

pub use clock::{Clock, ManualClock, SystemClock};
pub use identity::{client_address, rate_limit_key, UNKNOWN_CLIENT};
pub use limiter::{
    RateLimitConfig, RateLimitDecision, RateLimitEntry, RateLimitStore, RateLimiter,
};
pub use profiles::LimitProfiles;
