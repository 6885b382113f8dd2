//! Path management for RentLog
//!
//! ## Path Resolution Order
//!
//! 1. `RENTLOG_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/rentlog` on Linux,
//!    `~/Library/Application Support/rentlog` on macOS, `%APPDATA%\rentlog`
//!    on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::RentlogError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "RENTLOG_DATA_DIR";

/// Manages all paths used by RentLog
///
/// Documents themselves live wherever the user keeps them; these paths only
/// hold settings and the fallback profile's downloads.
#[derive(Debug, Clone)]
pub struct RentlogPaths {
    base_dir: PathBuf,
}

impl RentlogPaths {
    /// Create a new RentlogPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, RentlogError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RentlogPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory that receives fallback-profile downloads
    pub fn downloads_dir(&self) -> PathBuf {
        self.base_dir.join("downloads")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), RentlogError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RentlogError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.downloads_dir()).map_err(|e| {
            RentlogError::Io(format!("Failed to create downloads directory: {}", e))
        })?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, RentlogError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| RentlogError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("rentlog"))
}
