//! Named rate limit profiles
//!
//! Per-traffic-class budgets. Callers pick a profile by field or by name;
//! the limiter itself is profile-agnostic.

use serde::{Deserialize, Serialize};

use super::limiter::RateLimitConfig;

/// Budgets for each traffic class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitProfiles {
    /// Login and registration attempts
    pub auth: RateLimitConfig,
    /// General API traffic
    pub api: RateLimitConfig,
    /// Quiz answer submissions
    pub quiz_submission: RateLimitConfig,
    /// AI-assisted endpoints (expensive upstream calls)
    pub assist: RateLimitConfig,
}

impl Default for LimitProfiles {
    fn default() -> Self {
        Self {
            auth: RateLimitConfig::per_window(5, 15 * 60),
            api: RateLimitConfig::per_window(100, 60),
            quiz_submission: RateLimitConfig::per_window(30, 60),
            assist: RateLimitConfig::per_window(10, 60),
        }
    }
}

impl LimitProfiles {
    /// Look up a profile by name
    pub fn by_name(&self, name: &str) -> Option<RateLimitConfig> {
        match name {
            "auth" => Some(self.auth),
            "api" => Some(self.api),
            "quiz_submission" => Some(self.quiz_submission),
            "assist" => Some(self.assist),
            _ => None,
        }
    }
}
