//! Profile storage
//!
//! JSON persistence under the platform data directory.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::player::PlayerProfile;

/// Storage error types
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Get the profile file path
pub fn profile_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "quizforge", "Quizforge") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("profile.json");
        path
    } else {
        PathBuf::from("./profile.json")
    }
}

/// Load the player profile (or create default)
pub fn load_profile() -> PlayerProfile {
    let path = profile_path();

    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(profile) => {
                    log::info!("Profile loaded from {:?}", path);
                    return profile;
                }
                Err(e) => {
                    log::warn!("Failed to parse profile: {}, creating new", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read profile: {}, creating new", e);
            }
        }
    }

    log::info!("Creating new profile");
    PlayerProfile::new()
}

/// Save the player profile
pub fn save_profile(profile: &PlayerProfile) -> Result<(), StorageError> {
    let path = profile_path();

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
    }

    let json = serde_json::to_string_pretty(profile).map_err(|e| StorageError::Parse(e.to_string()))?;

    fs::write(&path, json).map_err(|e| StorageError::Io(e.to_string()))?;

    log::info!("Profile saved to {:?}", path);
    Ok(())
}
