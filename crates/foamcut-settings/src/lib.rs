//! Foamcut Settings Crate
//!
//! Handles machine configuration and classification settings files.
//! Supports JSON and TOML, with an optional platform-specific default
//! location.

pub mod config;
pub mod error;

pub use config::{
    ClassificationSettings, FeedRates, MachineConfig, Settings, SettingsFormat, SETTINGS_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};
