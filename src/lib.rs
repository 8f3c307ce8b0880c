//! Quizforge - core engine for a gamified quiz platform
//!
//! Level progression, quiz scoring, daily streaks, achievements,
//! and request rate limiting.

pub mod data;
pub mod profile;
pub mod progression;
pub mod quiz;
pub mod ratelimit;

// Re-export commonly used types
pub use profile::PlayerProfile;
pub use progression::{level_from_xp, streak_bonus, xp_for_level, LevelProgress};
pub use quiz::Difficulty;
pub use ratelimit::{RateLimitConfig, RateLimitDecision, RateLimiter};
