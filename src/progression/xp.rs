//! Experience and leveling
//!
//! XP thresholds, level decomposition, and streak bonuses.

use serde::{Deserialize, Serialize};

/// Calculate XP needed to complete a specific level
///
/// Invalid levels are clamped to 1 rather than rejected; display code
/// relies on these functions always succeeding.
pub fn xp_for_level(level: i32) -> u64 {
    let level = level.max(1);
    // Base 100 XP for level 1, x1.5 per level after
    (100.0 * 1.5f64.powi(level - 1)).floor() as u64
}

/// Calculate total XP needed from zero to reach a given level
pub fn total_xp_for_level(level: i32) -> u64 {
    (1..level.max(1)).map(xp_for_level).sum()
}

/// Level and in-level progress derived from a cumulative XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    /// XP progress within the current level, always below `next_level_xp`
    pub current_xp: u64,
    /// XP required to complete the current level
    pub next_level_xp: u64,
}

/// Decompose a cumulative XP total into level and in-level progress
///
/// Negative totals are clamped to zero. The thresholds grow geometrically,
/// so the loop finishes in O(log xp) steps.
pub fn level_from_xp(total_xp: i64) -> LevelProgress {
    let mut remainder = total_xp.max(0) as u64;
    let mut level: u32 = 1;
    let mut threshold = xp_for_level(level as i32);

    while remainder >= threshold {
        remainder -= threshold;
        level += 1;
        threshold = xp_for_level(level as i32);
    }

    LevelProgress {
        level,
        current_xp: remainder,
        next_level_xp: threshold,
    }
}

/// Bonus XP for consecutive-day streaks
///
/// +10% of the base award per streak day, capped at +100% from day 10.
/// A one-day streak is no streak at all.
pub fn streak_bonus(streak: i32, base_xp: u64) -> u64 {
    if streak <= 1 {
        return 0;
    }
    let mult = (streak as f64 * 0.1).min(1.0);
    (base_xp as f64 * mult).floor() as u64
}

/// Get a title/rank based on level
pub fn level_title(level: u32) -> &'static str {
    match level {
        1..=2 => "Rookie",
        3..=4 => "Apprentice",
        5..=7 => "Scholar",
        8..=10 => "Quizzer",
        11..=14 => "Expert",
        15..=18 => "Savant",
        19..=24 => "Mastermind",
        _ => "Legend",
    }
}
