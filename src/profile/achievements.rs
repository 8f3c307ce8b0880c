//! Achievement definitions and unlock rules
//!
//! Milestones over quiz counts, perfect scores, streaks, and levels.

use super::player::PlayerProfile;

/// Achievement definition
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub hidden: bool,
}

/// Get all achievement definitions
pub fn all_achievements() -> Vec<Achievement> {
    vec![
        // Quiz count achievements
        Achievement {
            id: "first_quiz",
            name: "Getting Started",
            description: "Complete your first quiz",
            hidden: false,
        },
        Achievement {
            id: "ten_quizzes",
            name: "Regular",
            description: "Complete 10 quizzes",
            hidden: false,
        },
        Achievement {
            id: "hundred_quizzes",
            name: "Quiz Addict",
            description: "Complete 100 quizzes",
            hidden: false,
        },
        // Perfect score achievements
        Achievement {
            id: "first_perfect",
            name: "Flawless",
            description: "Answer every question in a quiz correctly",
            hidden: false,
        },
        Achievement {
            id: "ten_perfect",
            name: "Perfectionist",
            description: "Score 10 perfect quizzes",
            hidden: false,
        },
        // Streak achievements
        Achievement {
            id: "week_streak",
            name: "Committed",
            description: "Keep a 7-day streak",
            hidden: false,
        },
        Achievement {
            id: "month_streak",
            name: "Unstoppable",
            description: "Keep a 30-day streak",
            hidden: false,
        },
        // Level achievements
        Achievement {
            id: "reach_level_5",
            name: "Scholar",
            description: "Reach level 5",
            hidden: false,
        },
        Achievement {
            id: "reach_level_10",
            name: "Quizzer",
            description: "Reach level 10",
            hidden: false,
        },
        Achievement {
            id: "reach_level_20",
            name: "Mastermind",
            description: "Reach level 20",
            hidden: false,
        },
        // Hidden achievements
        Achievement {
            id: "night_owl",
            name: "Night Owl",
            description: "Complete a quiz between midnight and 4am",
            hidden: true,
        },
    ]
}

/// Check unlock rules against the profile, returning newly unlocked ids
pub fn check_achievements(profile: &mut PlayerProfile) -> Vec<String> {
    let mut unlocked = Vec::new();

    check_quiz_achievements(profile, &mut unlocked);
    check_streak_achievements(profile, &mut unlocked);
    check_level_achievements(profile, &mut unlocked);

    unlocked
}

fn check_quiz_achievements(profile: &mut PlayerProfile, unlocked: &mut Vec<String>) {
    let quizzes = profile.stats.quizzes_completed;
    if quizzes >= 1 {
        unlock_into(profile, unlocked, "first_quiz");
    }
    if quizzes >= 10 {
        unlock_into(profile, unlocked, "ten_quizzes");
    }
    if quizzes >= 100 {
        unlock_into(profile, unlocked, "hundred_quizzes");
    }

    let perfect = profile.stats.perfect_quizzes;
    if perfect >= 1 {
        unlock_into(profile, unlocked, "first_perfect");
    }
    if perfect >= 10 {
        unlock_into(profile, unlocked, "ten_perfect");
    }
}

fn check_streak_achievements(profile: &mut PlayerProfile, unlocked: &mut Vec<String>) {
    if profile.stats.best_streak >= 7 {
        unlock_into(profile, unlocked, "week_streak");
    }
    if profile.stats.best_streak >= 30 {
        unlock_into(profile, unlocked, "month_streak");
    }
}

fn check_level_achievements(profile: &mut PlayerProfile, unlocked: &mut Vec<String>) {
    let level = profile.progress().level;
    if level >= 5 {
        unlock_into(profile, unlocked, "reach_level_5");
    }
    if level >= 10 {
        unlock_into(profile, unlocked, "reach_level_10");
    }
    if level >= 20 {
        unlock_into(profile, unlocked, "reach_level_20");
    }
}

fn unlock_into(profile: &mut PlayerProfile, unlocked: &mut Vec<String>, id: &str) {
    if profile.unlock_achievement(id) {
        unlocked.push(id.to_string());
    }
}
