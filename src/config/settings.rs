//! User settings for prorata-cli
//!
//! Controls how dates are read from the command line and how amounts are
//! printed.

use serde::{Deserialize, Serialize};

use super::paths::ProrataPaths;
use crate::error::ProrataError;

/// Largest supported number of printed decimal places
pub const MAX_DECIMAL_PLACES: u8 = 10;

/// User settings for prorata-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format for command-line dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Decimal places when printing amounts
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u8,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_decimal_places() -> u8 {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            decimal_places: default_decimal_places(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ProrataPaths) -> Result<Self, ProrataError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ProrataError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ProrataError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ProrataPaths) -> Result<(), ProrataError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ProrataError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ProrataError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check settings values are usable
    pub fn validate(&self) -> Result<(), ProrataError> {
        if self.date_format.trim().is_empty() {
            return Err(ProrataError::Config("date_format cannot be empty".into()));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ProrataError::Config(format!(
                "decimal_places must be at most {}",
                MAX_DECIMAL_PLACES
            )));
        }
        Ok(())
    }

    /// Format an amount using the configured precision
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{:.*}", self.decimal_places as usize, amount)
    }
}
