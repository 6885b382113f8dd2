//! User settings for RentLog
//!
//! Manages user preferences including the host file profile, currency display
//! and the most recently used document.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::RentlogPaths;
use crate::error::RentlogError;
use crate::gateway::HostProfile;

/// Which host file profile to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfilePreference {
    /// Use file handles whenever the host supports them
    #[default]
    Auto,
    /// Always use reusable file handles
    Handle,
    /// Always use one-shot upload/download
    Fallback,
}

impl ProfilePreference {
    /// Resolve the preference against what the host can do
    pub fn resolve(self, handles_supported: bool) -> HostProfile {
        match self {
            Self::Auto if handles_supported => HostProfile::Handle,
            Self::Auto => HostProfile::Fallback,
            Self::Handle => HostProfile::Handle,
            Self::Fallback => HostProfile::Fallback,
        }
    }
}

/// User settings for RentLog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown next to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Host file profile
    #[serde(default)]
    pub host_profile: ProfilePreference,

    /// Name suggested when saving a document for the first time
    #[serde(default = "default_file_name")]
    pub default_file_name: String,

    /// Most recently opened or saved document (handle profile only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_file_name() -> String {
    crate::gateway::DEFAULT_FILE_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            host_profile: ProfilePreference::default(),
            default_file_name: default_file_name(),
            recent_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &RentlogPaths) -> Result<Self, RentlogError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RentlogError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RentlogError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RentlogPaths) -> Result<(), RentlogError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RentlogError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            RentlogError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Remember the most recently used document
    ///
    /// Returns true if the stored value changed.
    pub fn remember_recent_file(&mut self, path: Option<PathBuf>) -> bool {
        if path.is_none() || self.recent_file == path {
            return false;
        }
        self.recent_file = path;
        true
    }
}
