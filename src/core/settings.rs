//! User settings
//!
//! [`GameSettings`] is the single configuration value handed to the entry
//! points: the controller is built from `GameConfig::from(&settings)` and the
//! engine stack from [`EngineSettings`].

use super::error::{CoreError, CoreResult};
use crate::game::ai::{AIDifficulty, GameConfig, GameMode, Opponent};
use crate::game::types::Color;
use crate::networking::DEFAULT_ENGINE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Overrides the engine address
pub const ENV_ENGINE_URL: &str = "MATHCHESS_ENGINE_URL";
/// `true`/`false` (also `1`/`0`)
pub const ENV_ENGINE_ENABLED: &str = "MATHCHESS_ENGINE_ENABLED";

/// External engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub enabled: bool,
    pub url: String,
    pub health_timeout_secs: u64,
    pub analysis_timeout_secs: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            url: DEFAULT_ENGINE_URL.to_string(),
            health_timeout_secs: 2,
            analysis_timeout_secs: 5,
        }
    }
}

impl EngineSettings {
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(self.analysis_timeout_secs)
    }
}

/// User preferences persisted between sessions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub game_mode: GameMode,
    pub ai_difficulty: AIDifficulty,
    pub opponent: Opponent,
    pub player_color: Color,
    pub engine: EngineSettings,
}

impl GameSettings {
    /// Apply `MATHCHESS_*` environment variables on top of these settings
    pub fn apply_env_overrides(&mut self) -> CoreResult<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable source
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_ENGINE_URL) {
            info!("[SETTINGS] Engine URL overridden: {}", url);
            self.engine.url = url;
        }
        if let Some(value) = lookup(ENV_ENGINE_ENABLED) {
            self.engine.enabled = parse_bool(&value).ok_or_else(|| CoreError::InvalidEnv {
                name: ENV_ENGINE_ENABLED.to_string(),
                value: value.clone(),
            })?;
            info!("[SETTINGS] Engine enabled overridden: {}", self.engine.enabled);
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl From<&GameSettings> for GameConfig {
    fn from(settings: &GameSettings) -> Self {
        GameConfig {
            mode: settings.game_mode,
            difficulty: settings.ai_difficulty,
            opponent: settings.opponent,
            player_color: settings.player_color,
        }
    }
}
