//! User settings for kontuak
//!
//! Manages the home currency, the first year of entries, the rounding policy
//! for amounts and where the categorization rules live.

use serde::{Deserialize, Serialize};

use super::paths::KontuakPaths;
use crate::error::KontuakError;
use crate::export::RenderOptions;
use crate::models::{AmountPrecision, DEFAULT_CURRENCY};
use crate::storage::write_text_atomic;

/// User settings for kontuak
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency of bare numbers
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// First year scanned by `update`
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Rounding of rendered amounts
    #[serde(default)]
    pub amount_precision: AmountPrecision,

    /// Rules file, relative to the base directory
    #[serde(default = "default_rules_file")]
    pub rules_file: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_start_year() -> i32 {
    2018
}

fn default_rules_file() -> String {
    "rules.yml".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            start_year: default_start_year(),
            amount_precision: AmountPrecision::default(),
            rules_file: default_rules_file(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &KontuakPaths) -> Result<Self, KontuakError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                KontuakError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                KontuakError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check values serde can't
    pub fn validate(&self) -> Result<(), KontuakError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(KontuakError::Config(
                "currency_symbol must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KontuakPaths) -> Result<(), KontuakError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            KontuakError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        write_text_atomic(paths.settings_file(), &contents)
    }

    /// Journal rendering options for these settings
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            home_currency: self.currency_symbol.clone(),
            precision: self.amount_precision,
        }
    }
}
