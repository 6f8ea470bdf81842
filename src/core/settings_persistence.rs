//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file so preferences survive
//! across sessions.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the user's configuration
//! directory, e.g. `~/.config/mathchess/settings.json` on Linux. A platform
//! without one has nowhere to save; loading then uses defaults.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller

use super::error::{CoreError, CoreResult};
use super::settings::GameSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file path
pub fn settings_path() -> CoreResult<PathBuf> {
    path_in(ProjectDirs::from("org", "mathchess", "mathchess"))
}

fn path_in(dirs: Option<ProjectDirs>) -> CoreResult<PathBuf> {
    dirs.map(|d| d.config_dir().join(SETTINGS_FILENAME))
        .ok_or(CoreError::NoConfigDir)
}

/// Load settings from the user's configuration directory
pub fn load_settings() -> GameSettings {
    match settings_path() {
        Ok(path) => load_settings_from(&path),
        Err(e) => {
            warn!("[SETTINGS] {}. Using defaults.", e);
            GameSettings::default()
        }
    }
}

/// Load settings from `path`, falling back to defaults if missing or invalid
pub fn load_settings_from(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<GameSettings>(&contents) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                GameSettings::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Save settings to the user's configuration directory
pub fn save_settings(settings: &GameSettings) -> CoreResult<PathBuf> {
    let path = settings_path()?;
    save_settings_to(settings, &path)?;
    Ok(path)
}

/// Save settings to `path`, creating parent directories as needed
pub fn save_settings_to(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
