//! Quiz difficulty tiers
//!
//! Base XP and bonus multipliers per tier.

use serde::{Deserialize, Serialize};

/// Question difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Base XP for a correct answer
    pub fn base_xp(&self) -> u64 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    /// Multiplier applied to quiz completion bonuses
    pub fn xp_mult(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harder_pays_more() {
        assert!(Difficulty::Easy.base_xp() < Difficulty::Medium.base_xp());
        assert!(Difficulty::Medium.base_xp() < Difficulty::Hard.base_xp());
        assert!(Difficulty::Easy.xp_mult() < Difficulty::Hard.xp_mult());
    }

    #[test]
    fn test_names() {
        assert_eq!(Difficulty::Medium.name(), "Medium");
    }
}
