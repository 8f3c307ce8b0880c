//! Quizforge - Profile Inspector
//!
//! Small CLI that prints the level curve and the local profile's
//! progression, for poking at the engine outside the web stack.

use anyhow::Result;

use quizforge::profile::{load_profile, profile_path};
use quizforge::progression::{level_title, total_xp_for_level, xp_for_level};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting quizforge inspector v{}", env!("CARGO_PKG_VERSION"));

    print_level_table(20);

    let profile = load_profile();
    let progress = profile.progress();

    println!();
    println!("Profile: {}", profile_path().display());
    println!(
        "Level {} ({}) - {} / {} XP into the level, {} total",
        progress.level,
        profile.title(),
        progress.current_xp,
        progress.next_level_xp,
        profile.total_xp
    );
    println!(
        "Streak: {} day(s), best {}",
        profile.streak, profile.stats.best_streak
    );
    println!(
        "Quizzes: {} completed, {} perfect, {}/{} answers correct",
        profile.stats.quizzes_completed,
        profile.stats.perfect_quizzes,
        profile.stats.correct_answers,
        profile.stats.questions_answered
    );
    println!("Achievements: {}", profile.achievements.len());

    Ok(())
}

/// Print the XP curve for the first `levels` levels
fn print_level_table(levels: i32) {
    println!("Level  Title       To complete  Cumulative");
    for level in 1..=levels {
        println!(
            "{:>5}  {:<10}  {:>11}  {:>10}",
            level,
            level_title(level as u32),
            xp_for_level(level),
            total_xp_for_level(level)
        );
    }
}
