//! Progression systems

pub mod xp;

pub use xp::{
    level_from_xp, level_title, streak_bonus, total_xp_for_level, xp_for_level, LevelProgress,
};
