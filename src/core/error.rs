//! Error types for core module
//!
//! Provides custom error types for settings persistence and configuration.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// The platform has no per-user configuration directory
    #[error("No configuration directory available")]
    NoConfigDir,

    /// An environment override could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: String, value: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
