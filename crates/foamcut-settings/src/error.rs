//! Error types for the settings crate.
//!
//! This module provides structured error types for settings file loading,
//! saving and validation.

use foamcut_core::ConfigError;
use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be loaded.
    #[error("Failed to load settings from {path}: {source}")]
    LoadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The settings file could not be saved.
    #[error("Failed to save settings to {path}: {source}")]
    SaveError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The settings file extension is not supported.
    #[error("Settings file must be .json or .toml: {0}")]
    UnsupportedFormat(String),

    /// The machine configuration is invalid.
    #[error("Invalid machine configuration: {0}")]
    Invalid(#[from] ConfigError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
