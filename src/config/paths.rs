//! Path management for prorata-cli
//!
//! ## Path Resolution Order
//!
//! 1. `PRORATA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/prorata-cli` or `~/.config/prorata-cli`
//! 3. Windows: `%APPDATA%\prorata-cli`

use std::path::PathBuf;

use crate::error::ProrataError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "PRORATA_DATA_DIR";

/// Manages all paths used by prorata-cli
#[derive(Debug, Clone)]
pub struct ProrataPaths {
    base_dir: PathBuf,
}

impl ProrataPaths {
    /// Create a new ProrataPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ProrataError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ProrataPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ProrataError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ProrataError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ProrataError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if prorata-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ProrataError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ProrataError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("prorata-cli"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ProrataError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ProrataError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("prorata-cli"))
}
