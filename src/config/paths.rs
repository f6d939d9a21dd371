//! Path management for kontuak
//!
//! All bookkeeping data lives under one base directory:
//!
//! ```text
//! <base>/config.json                  settings
//! <base>/rules.yml                    categorization rules
//! <base>/<year>/<account>/<MM>.yml    entry files
//! <base>/journals/<account>.journal   rendered journals
//! ```
//!
//! ## Path Resolution Order
//!
//! 1. `KONTUAK_DIR` environment variable (if set)
//! 2. `$XDG_DATA_HOME/kontuak` or `~/.local/share/kontuak`

use std::path::{Path, PathBuf};

use crate::error::KontuakError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "KONTUAK_DIR";

/// Manages all paths used by kontuak
#[derive(Debug, Clone)]
pub struct KontuakPaths {
    /// Base directory for all kontuak data
    base_dir: PathBuf,
}

impl KontuakPaths {
    /// Create a new KontuakPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory is set.
    pub fn new() -> Result<Self, KontuakError> {
        let base_dir = if let Ok(custom) = std::env::var(BASE_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KontuakPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the entry directory for a year (<base>/2019/)
    pub fn year_dir(&self, year: i32) -> PathBuf {
        self.base_dir.join(year.to_string())
    }

    /// Get the entry directory of an account for a year (<base>/2019/triodos/)
    pub fn account_dir(&self, year: i32, account: &str) -> PathBuf {
        self.year_dir(year).join(account)
    }

    /// Get the directory of rendered journals
    pub fn journals_dir(&self) -> PathBuf {
        self.base_dir.join("journals")
    }

    /// Get the rendered journal of an account
    pub fn journal_file(&self, account: &str) -> PathBuf {
        self.journals_dir().join(format!("{}.journal", account))
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to a rules file, relative names resolved against the base
    pub fn rules_file(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Ensure the base and journals directories exist
    pub fn ensure_directories(&self) -> Result<(), KontuakError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KontuakError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.journals_dir())
            .map_err(|e| KontuakError::Io(format!("Failed to create journals directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, KontuakError> {
    let data_base = match std::env::var("XDG_DATA_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                KontuakError::Config(format!(
                    "Could not determine the data directory, set {} or HOME",
                    BASE_DIR_ENV
                ))
            })?;
            PathBuf::from(home).join(".local").join("share")
        }
    };
    Ok(data_base.join("kontuak"))
}
