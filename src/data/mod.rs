//! RON data loader
//!
//! Loads tunable engine data from external RON files, with fallback to
//! compiled-in defaults.

use std::fs;
use std::path::Path;

use crate::ratelimit::LimitProfiles;

/// Manages all external engine data
#[derive(Debug, Clone, Default)]
pub struct EngineData {
    /// Rate limit budgets per traffic class
    pub limits: LimitProfiles,
}

impl EngineData {
    /// Create a new EngineData, loading from files or using defaults
    pub fn new() -> Self {
        Self::load_from(Path::new("assets/data"))
    }

    /// Load data from a directory, falling back per file
    pub fn load_from(base_path: &Path) -> Self {
        Self {
            limits: load_limits(base_path),
        }
    }
}

/// Load rate limit profiles from RON file
fn load_limits(base_path: &Path) -> LimitProfiles {
    let path = base_path.join("limits.ron");
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(profiles) => return profiles,
                Err(e) => log::warn!("Failed to parse limits.ron: {}", e),
            },
            Err(e) => log::warn!("Failed to read limits.ron: {}", e),
        }
    }
    LimitProfiles::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_falls_back_to_defaults() {
        let data = EngineData::load_from(Path::new("no/such/dir"));
        assert_eq!(data.limits, LimitProfiles::default());
    }

    #[test]
    fn test_limit_profiles_round_trip_through_ron() {
        let profiles = LimitProfiles::default();
        let text = ron::to_string(&profiles).unwrap();
        let back: LimitProfiles = ron::from_str(&text).unwrap();
        assert_eq!(back, profiles);
    }
}
