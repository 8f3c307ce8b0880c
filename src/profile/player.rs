//! Player profile and persistent progression
//!
//! Tracks XP, daily streaks, statistics, and achievements across sessions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::progression::{level_from_xp, level_title, LevelProgress};
use crate::quiz::QuizReward;

use super::achievements::check_achievements;

/// Current profile version for compatibility
pub const PROFILE_VERSION: u32 = 1;

/// Milliseconds in a day, for epoch-day bucketing
const DAY_MS: u64 = 86_400_000;

/// Convert an epoch-millisecond timestamp into a whole day number
pub fn epoch_day(now_ms: u64) -> u64 {
    now_ms / DAY_MS
}

/// Persistent player record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Version for compatibility checking
    pub version: u32,
    /// Cumulative experience, never decreasing
    pub total_xp: u64,
    /// Consecutive days with at least one completed quiz
    pub streak: u32,
    /// Last day (epoch days) the streak was fed
    pub last_active_day: Option<u64>,
    /// Player statistics
    pub stats: ProfileStats,
    /// Unlocked achievements
    pub achievements: HashSet<String>,
    /// Display preferences
    pub settings: ProfileSettings,
}

/// Profile statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Quizzes completed
    pub quizzes_completed: u32,
    /// Quizzes with every answer correct
    pub perfect_quizzes: u32,
    /// Total questions answered
    pub questions_answered: u32,
    /// Total correct answers
    pub correct_answers: u32,
    /// Longest daily streak reached
    pub best_streak: u32,
    /// Power-ups spent
    pub power_ups_used: u32,
}

/// Profile settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Show the player on public leaderboards
    pub public_profile: bool,
    /// Notify on friend activity
    pub friend_notifications: bool,
    /// Preferred category id, if any
    pub favorite_category: Option<String>,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            public_profile: true,
            friend_notifications: true,
            favorite_category: None,
        }
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            total_xp: 0,
            streak: 0,
            last_active_day: None,
            stats: ProfileStats::default(),
            achievements: HashSet::new(),
            settings: ProfileSettings::default(),
        }
    }
}

impl PlayerProfile {
    /// Create a new profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Level and in-level progress for the current XP total
    pub fn progress(&self) -> LevelProgress {
        level_from_xp(self.total_xp as i64)
    }

    /// Rank title for the current level
    pub fn title(&self) -> &'static str {
        level_title(self.progress().level)
    }

    /// Add XP and report how many levels were gained
    pub fn award_xp(&mut self, amount: u64) -> u32 {
        let before = self.progress().level;
        self.total_xp += amount;
        let after = self.progress().level;

        if after > before {
            log::info!("Level up: {} -> {}", before, after);
        }
        after - before
    }

    /// Feed the daily streak
    ///
    /// Activity on the next calendar day extends the streak. Same-day
    /// activity changes nothing; a longer gap restarts the streak at 1.
    pub fn record_activity(&mut self, today_epoch_day: u64) {
        match self.last_active_day {
            Some(last) if today_epoch_day == last => {}
            Some(last) if today_epoch_day == last + 1 => {
                self.streak += 1;
            }
            _ => {
                self.streak = 1;
            }
        }
        if self.streak > self.stats.best_streak {
            self.stats.best_streak = self.streak;
        }
        self.last_active_day = Some(today_epoch_day);
    }

    /// Record a completed quiz and award its XP
    ///
    /// Returns the ids of any achievements unlocked by this quiz.
    pub fn record_quiz(
        &mut self,
        reward: &QuizReward,
        correct: u32,
        total: u32,
        today_epoch_day: u64,
    ) -> Vec<String> {
        self.record_activity(today_epoch_day);

        self.stats.quizzes_completed += 1;
        self.stats.questions_answered += total;
        self.stats.correct_answers += correct;
        if reward.perfect {
            self.stats.perfect_quizzes += 1;
        }

        self.award_xp(reward.xp);
        check_achievements(self)
    }

    /// Record a power-up use
    pub fn record_power_up(&mut self) {
        self.stats.power_ups_used += 1;
    }

    /// Check if an achievement is unlocked
    pub fn has_achievement(&self, achievement_id: &str) -> bool {
        self.achievements.contains(achievement_id)
    }

    /// Unlock an achievement
    pub fn unlock_achievement(&mut self, achievement_id: &str) -> bool {
        if !self.achievements.contains(achievement_id) {
            self.achievements.insert(achievement_id.to_string());
            log::info!("Achievement unlocked: {}", achievement_id);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{quiz_reward, Difficulty};

    #[test]
    fn test_award_xp_counts_levels_gained() {
        let mut profile = PlayerProfile::new();
        assert_eq!(profile.award_xp(50), 0);
        assert_eq!(profile.award_xp(50), 1); // crosses the 100 XP threshold
        assert_eq!(profile.progress().level, 2);

        // 150 + 225 completes levels 2 and 3 in one award
        assert_eq!(profile.award_xp(375), 2);
        assert_eq!(profile.progress().level, 4);
    }

    #[test]
    fn test_streak_rules() {
        let mut profile = PlayerProfile::new();

        profile.record_activity(100);
        assert_eq!(profile.streak, 1);

        profile.record_activity(100); // same day, no change
        assert_eq!(profile.streak, 1);

        profile.record_activity(101); // next day extends
        assert_eq!(profile.streak, 2);

        profile.record_activity(105); // gap resets
        assert_eq!(profile.streak, 1);
        assert_eq!(profile.stats.best_streak, 2);
    }

    #[test]
    fn test_record_quiz_updates_stats_and_xp() {
        let mut profile = PlayerProfile::new();
        let reward = quiz_reward(120, 10, 10, Difficulty::Medium, 0);

        let unlocked = profile.record_quiz(&reward, 10, 10, 200);

        assert_eq!(profile.stats.quizzes_completed, 1);
        assert_eq!(profile.stats.perfect_quizzes, 1);
        assert_eq!(profile.stats.correct_answers, 10);
        assert_eq!(profile.total_xp, reward.xp);
        assert_eq!(profile.streak, 1);
        assert!(unlocked.contains(&"first_quiz".to_string()));
        assert!(unlocked.contains(&"first_perfect".to_string()));

        profile.record_power_up();
        assert_eq!(profile.stats.power_ups_used, 1);
    }

    #[test]
    fn test_unlock_achievement_is_idempotent() {
        let mut profile = PlayerProfile::new();
        assert!(profile.unlock_achievement("first_quiz"));
        assert!(!profile.unlock_achievement("first_quiz"));
        assert!(profile.has_achievement("first_quiz"));
    }

    #[test]
    fn test_epoch_day_buckets() {
        assert_eq!(epoch_day(0), 0);
        assert_eq!(epoch_day(86_399_999), 0);
        assert_eq!(epoch_day(86_400_000), 1);
    }
}
