//! Quiz scoring
//!
//! Turns answers and quiz results into the XP amounts the caller persists.

use crate::progression::streak_bonus;

use super::difficulty::Difficulty;

/// Max speed bonus as a share of base XP (answering instantly)
const SPEED_BONUS_MAX: f64 = 0.5;

/// Flat bonus for answering every question correctly, before the
/// difficulty multiplier
const PERFECT_BONUS: u64 = 50;

/// XP breakdown for a single answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerScore {
    /// Base XP plus speed bonus; zero when incorrect
    pub xp: u64,
    /// Portion of `xp` that came from answering quickly
    pub speed_bonus: u64,
}

/// Score one answer
///
/// The speed bonus scales linearly with time remaining; an answer at or
/// past the time limit earns base XP only. Wrong answers earn nothing.
pub fn score_answer(
    difficulty: Difficulty,
    correct: bool,
    response_ms: u64,
    time_limit_ms: u64,
) -> AnswerScore {
    if !correct {
        return AnswerScore { xp: 0, speed_bonus: 0 };
    }

    let base = difficulty.base_xp();
    let speed_bonus = if time_limit_ms == 0 {
        0
    } else {
        let remaining = time_limit_ms.saturating_sub(response_ms) as f64 / time_limit_ms as f64;
        (base as f64 * SPEED_BONUS_MAX * remaining).floor() as u64
    };

    AnswerScore {
        xp: base + speed_bonus,
        speed_bonus,
    }
}

/// XP awarded for a completed quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizReward {
    /// Total XP to persist
    pub xp: u64,
    /// Portion of `xp` that came from the streak bonus
    pub streak_xp: u64,
    /// Every question answered correctly
    pub perfect: bool,
}

/// Aggregate a quiz result into one XP award
///
/// `answer_xp` is the sum of per-answer scores. A perfect quiz adds a
/// difficulty-scaled completion bonus, and the daily streak bonus applies
/// to the whole award.
pub fn quiz_reward(
    answer_xp: u64,
    correct: u32,
    total: u32,
    difficulty: Difficulty,
    streak: i32,
) -> QuizReward {
    let perfect = total > 0 && correct == total;
    let completion = if perfect {
        (PERFECT_BONUS as f64 * difficulty.xp_mult()).round() as u64
    } else {
        0
    };

    let base = answer_xp + completion;
    let streak_xp = streak_bonus(streak, base);

    QuizReward {
        xp: base + streak_xp,
        streak_xp,
        perfect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_answers_earn_nothing() {
        let score = score_answer(Difficulty::Hard, false, 0, 30_000);
        assert_eq!(score.xp, 0);
        assert_eq!(score.speed_bonus, 0);
    }

    #[test]
    fn test_instant_answer_gets_full_speed_bonus() {
        let score = score_answer(Difficulty::Easy, true, 0, 30_000);
        assert_eq!(score.xp, 15); // 10 base + 50% speed bonus
        assert_eq!(score.speed_bonus, 5);
    }

    #[test]
    fn test_slow_answer_gets_base_only() {
        let at_limit = score_answer(Difficulty::Medium, true, 30_000, 30_000);
        assert_eq!(at_limit.xp, 20);
        assert_eq!(at_limit.speed_bonus, 0);

        let past_limit = score_answer(Difficulty::Medium, true, 45_000, 30_000);
        assert_eq!(past_limit.xp, 20); // lenient, not punitive
    }

    #[test]
    fn test_halfway_answer_gets_half_bonus() {
        let score = score_answer(Difficulty::Hard, true, 15_000, 30_000);
        assert_eq!(score.speed_bonus, 7); // floor(30 * 0.5 * 0.5)
        assert_eq!(score.xp, 37);
    }

    #[test]
    fn test_untimed_question_has_no_speed_bonus() {
        let score = score_answer(Difficulty::Easy, true, 5_000, 0);
        assert_eq!(score.xp, 10);
    }

    #[test]
    fn test_perfect_quiz_bonus_scales_with_difficulty() {
        let reward = quiz_reward(200, 10, 10, Difficulty::Hard, 0);
        assert!(reward.perfect);
        assert_eq!(reward.xp, 265); // 200 + round(50 * 1.3)

        let imperfect = quiz_reward(200, 9, 10, Difficulty::Hard, 0);
        assert!(!imperfect.perfect);
        assert_eq!(imperfect.xp, 200);
    }

    #[test]
    fn test_streak_applies_to_whole_award() {
        let reward = quiz_reward(100, 5, 10, Difficulty::Medium, 5);
        assert_eq!(reward.streak_xp, 50); // +50% at a 5-day streak
        assert_eq!(reward.xp, 150);
    }

    #[test]
    fn test_empty_quiz_is_not_perfect() {
        let reward = quiz_reward(0, 0, 0, Difficulty::Easy, 0);
        assert!(!reward.perfect);
        assert_eq!(reward.xp, 0);
    }
}
