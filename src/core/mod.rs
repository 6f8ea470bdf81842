//! Core module - Application configuration
//!
//! # Modules
//!
//! - `settings` - [`GameSettings`] and [`EngineSettings`], the configuration
//!   the entry points are built from, plus `MATHCHESS_*` environment overrides
//! - `settings_persistence` - `settings.json` under the user config directory
//! - `error` - [`CoreError`] for configuration failures
//!
//! # Usage Example
//!
//! ```rust,ignore
//! let mut settings = mathchess::core::load_settings();
//! settings.apply_env_overrides()?;
//! let config = GameConfig::from(&settings);
//! ```

pub mod error;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings::{EngineSettings, GameSettings};
pub use settings_persistence::{load_settings, save_settings, settings_path};
