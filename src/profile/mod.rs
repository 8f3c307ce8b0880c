//! Player profiles
//!
//! Persistent progression, statistics, and achievements.

pub mod achievements;
pub mod player;
pub mod store;

pub use achievements::{all_achievements, check_achievements, Achievement};
pub use player::{epoch_day, PlayerProfile, ProfileSettings, ProfileStats, PROFILE_VERSION};
pub use store::{load_profile, profile_path, save_profile, StorageError};
