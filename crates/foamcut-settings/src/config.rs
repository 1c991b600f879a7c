//! Settings file handling for foamcut
//!
//! A settings file carries two sections:
//! - `machine`: depths, feed rates and translation ([`MachineConfig`])
//! - `classification`: which stroke colors are cut or scored, and the
//!   optional group filter
//!
//! JSON and TOML are both supported; the format is chosen by file extension.

use crate::error::{SettingsError, SettingsResult};
pub use foamcut_core::{FeedRates, MachineConfig};
use foamcut_core::{RgbColor, RoleClassifier};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used inside the platform config directory
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Supported settings file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl SettingsFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Color-to-role mapping and group filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationSettings {
    /// Only fragments in one of these groups are used (empty = all groups)
    pub include_groups: Vec<String>,
    /// Stroke colors that are cut through
    pub cut_colors: Vec<RgbColor>,
    /// Stroke colors that are scored
    pub score_colors: Vec<RgbColor>,
}

impl ClassificationSettings {
    /// Build the classifier described by these settings
    pub fn classifier(&self) -> RoleClassifier {
        let mut classifier = RoleClassifier::new();
        for color in &self.cut_colors {
            classifier.add_cut_color(*color);
        }
        for color in &self.score_colors {
            classifier.add_score_color(*color);
        }
        for group in &self.include_groups {
            classifier.add_group_name(group.clone());
        }
        classifier
    }
}

/// Complete settings file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Machine configuration
    pub machine: MachineConfig,
    /// Fragment classification rules
    pub classification: ClassificationSettings,
}

impl Settings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform-specific default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("foamcut").join(SETTINGS_FILE_NAME))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = SettingsFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::LoadError {
            path: path.display().to_string(),
            source,
        })?;

        let settings: Self = match format {
            SettingsFormat::Json => serde_json::from_str(&content)?,
            SettingsFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Load settings from [`Settings::default_path`], using defaults when
    /// there is no file or no platform config directory
    pub fn load_default() -> SettingsResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                tracing::warn!("no platform config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match SettingsFormat::from_path(path)? {
            SettingsFormat::Json => serde_json::to_string_pretty(self)?,
            SettingsFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content).map_err(|source| SettingsError::SaveError {
            path: path.display().to_string(),
            source,
        })?;

        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.machine.validate()?;
        Ok(())
    }
}
