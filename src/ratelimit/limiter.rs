//! Fixed-window rate limiting
//!
//! Per-identifier counters with a fixed reset window, checked before
//! privileged work (logins, quiz submissions, expensive API calls).

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};

/// Expired entries are swept at most this often
const SWEEP_INTERVAL_MS: u64 = 60_000;

/// Request budget for one traffic class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests admitted per window
    pub limit: u32,
    /// Window length in milliseconds
    pub window_ms: u64,
}

impl RateLimitConfig {
    /// Build a config from a requests-per-window budget
    pub const fn per_window(limit: u32, window_secs: u64) -> Self {
        Self {
            limit,
            window_ms: window_secs * 1000,
        }
    }
}

/// Counter state for one identifier
#[derive(Debug, Clone, Copy)]
pub struct RateLimitEntry {
    /// Requests seen in the current window
    pub count: u32,
    /// When the window ends (epoch ms)
    pub reset_at_ms: u64,
}

/// Outcome of a single admission check
///
/// Rejection is a normal result, not an error; the caller turns it into an
/// HTTP 429 with the values carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    /// Budget left in the window after this request
    pub remaining: u32,
    /// When the window ends (epoch ms)
    pub reset_at_ms: u64,
}

impl RateLimitDecision {
    /// Whole seconds a rejected caller should wait before retrying
    pub fn retry_after_secs(&self, now_ms: u64) -> u64 {
        let wait_ms = self.reset_at_ms.saturating_sub(now_ms);
        (wait_ms + 999) / 1000
    }

    /// Values for the standard X-RateLimit-* response headers
    pub fn headers(&self) -> [(&'static str, String); 3] {
        [
            ("X-RateLimit-Limit", self.limit.to_string()),
            ("X-RateLimit-Remaining", self.remaining.to_string()),
            ("X-RateLimit-Reset", (self.reset_at_ms / 1000).to_string()),
        ]
    }
}

fn decision(allowed: bool, limit: u32, count: u32, reset_at_ms: u64) -> RateLimitDecision {
    RateLimitDecision {
        allowed,
        limit,
        remaining: limit.saturating_sub(count),
        reset_at_ms,
    }
}

/// In-memory identifier -> counter map with periodic expiry sweeps
///
/// Constructed explicitly and injected where needed, so tests get isolated
/// instances and a networked store could replace it behind the same call
/// contract. State is per process; across instances each process enforces
/// its own budget.
pub struct RateLimitStore {
    entries: HashMap<String, RateLimitEntry>,
    last_sweep_ms: u64,
    clock: Arc<dyn Clock>,
}

impl RateLimitStore {
    /// Create a store running on the wall clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a store with an injected clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let now = clock.now_ms();
        Self {
            entries: HashMap::new(),
            last_sweep_ms: now,
            clock,
        }
    }

    /// Admit or reject one request for `identifier` under `config`
    ///
    /// Never fails. An entry whose window has elapsed is treated as absent,
    /// whether or not the sweep has removed it yet.
    pub fn check(&mut self, identifier: &str, config: &RateLimitConfig) -> RateLimitDecision {
        let now = self.clock.now_ms();
        self.sweep_expired(now);

        match self.entries.get_mut(identifier) {
            Some(entry) if now < entry.reset_at_ms => {
                if entry.count < config.limit {
                    entry.count += 1;
                    return decision(true, config.limit, entry.count, entry.reset_at_ms);
                }
                log::debug!("rate limit exceeded for {}", identifier);
                return decision(false, config.limit, entry.count, entry.reset_at_ms);
            }
            _ => {}
        }

        // First request for this identifier, or its window has elapsed
        let entry = RateLimitEntry {
            count: 1,
            reset_at_ms: now + config.window_ms,
        };
        self.entries.insert(identifier.to_string(), entry);
        decision(true, config.limit, 1, entry.reset_at_ms)
    }

    /// Forget one identifier, restoring its full budget immediately
    pub fn reset(&mut self, identifier: &str) {
        self.entries.remove(identifier);
    }

    /// Drop all tracked identifiers
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of identifiers currently tracked
    pub fn tracked(&self) -> usize {
        self.entries.len()
    }

    /// Remove expired entries, at most once per sweep interval
    ///
    /// Bounds memory only; `check` never relies on the sweep because it
    /// treats elapsed windows as absent.
    fn sweep_expired(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_sweep_ms) < SWEEP_INTERVAL_MS {
            return;
        }
        let before = self.entries.len();
        self.entries.retain(|_, entry| now_ms < entry.reset_at_ms);
        self.last_sweep_ms = now_ms;

        let removed = before - self.entries.len();
        if removed > 0 {
            log::debug!("swept {} expired rate limit entries", removed);
        }
    }
}

impl Default for RateLimitStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle sharing one store across request handlers
///
/// The lock keeps each check-then-increment a single atomic step.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimitStore>>,
}

impl RateLimiter {
    /// Create a limiter on the wall clock
    pub fn new() -> Self {
        Self::from_store(RateLimitStore::new())
    }

    /// Wrap an existing store
    pub fn from_store(store: RateLimitStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn check(&self, identifier: &str, config: &RateLimitConfig) -> RateLimitDecision {
        self.inner.lock().check(identifier, config)
    }

    pub fn reset(&self, identifier: &str) {
        self.inner.lock().reset(identifier);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
