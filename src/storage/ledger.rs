//! The entry tree
//!
//! Entry files are grouped by year and account: `<base>/<year>/<account>/*.yml`.
//! Each file lists its entries newest first, so the loader reverses every
//! file before appending it to the account. Files and years are read in
//! ascending order.

use std::collections::BTreeMap;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use super::file_io::{read_text, write_text_atomic};
use crate::config::paths::KontuakPaths;
use crate::error::{KontuakError, KontuakResult};
use crate::export::journal::JournalRenderer;
use crate::export::yaml::load_entries;
use crate::models::JournalEntry;

/// Entries of every account, in journal order
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: BTreeMap<String, Vec<JournalEntry>>,
}

impl Ledger {
    /// Load the entry tree for the given years
    ///
    /// Missing year directories are skipped.
    pub fn load(paths: &KontuakPaths, years: RangeInclusive<i32>) -> KontuakResult<Self> {
        let mut ledger = Self::default();

        for year in years {
            let year_dir = paths.year_dir(year);
            if !year_dir.is_dir() {
                log::debug!("No entries for {}", year);
                continue;
            }

            for account_dir in sorted_children(&year_dir)? {
                if !account_dir.is_dir() {
                    log::warn!("Skipping {}, not an account directory", account_dir.display());
                    continue;
                }

                let Some(account) = account_dir.file_name().and_then(|name| name.to_str()) else {
                    log::warn!("Skipping {}, not a valid account name", account_dir.display());
                    continue;
                };

                let entries = load_account_dir(&account_dir)?;
                ledger
                    .accounts
                    .entry(account.to_string())
                    .or_default()
                    .extend(entries);
            }
        }

        Ok(ledger)
    }

    /// Account names, sorted
    pub fn accounts(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }

    /// Entries of one account
    pub fn entries(&self, account: &str) -> &[JournalEntry] {
        self.accounts.get(account).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Render and write one journal per account, returning the written paths
    pub fn write_journals(
        &self,
        paths: &KontuakPaths,
        renderer: &JournalRenderer,
    ) -> KontuakResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.accounts.len());

        for (account, entries) in &self.accounts {
            let journal = renderer.render(entries)?;
            let path = paths.journal_file(account);
            write_text_atomic(&path, &journal)?;
            log::info!("Wrote {} ({} entries)", path.display(), entries.len());
            written.push(path);
        }

        Ok(written)
    }
}

/// Path of the file an import starting at `first_date` is written to
///
/// `<base>/<YYYY>/<dir>/<MM>-tmp.yml`
pub fn import_file_path(paths: &KontuakPaths, dir: &str, first_date: &str) -> KontuakResult<PathBuf> {
    let (year, month) = match (first_date.get(0..4), first_date.get(5..7)) {
        (Some(year), Some(month)) => (year, month),
        _ => {
            return Err(KontuakError::Storage(format!(
                "Not a YYYY-MM-DD date: {}",
                first_date
            )))
        }
    };

    let year: i32 = year
        .parse()
        .map_err(|_| KontuakError::Storage(format!("Not a YYYY-MM-DD date: {}", first_date)))?;

    Ok(paths
        .account_dir(year, dir)
        .join(format!("{}-tmp.yml", month)))
}

fn load_account_dir(dir: &Path) -> KontuakResult<Vec<JournalEntry>> {
    let mut entries = Vec::new();

    for path in sorted_children(dir)? {
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("yml") {
            continue;
        }

        let mut file_entries = load_entries(&read_text(&path)?).map_err(|e| {
            KontuakError::Storage(format!("Failed to load {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded {} entries from {}", file_entries.len(), path.display());

        file_entries.reverse();
        entries.extend(file_entries);
    }

    Ok(entries)
}

fn sorted_children(dir: &Path) -> KontuakResult<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir)
        .map_err(|e| KontuakError::Storage(format!("Failed to read {}: {}", dir.display(), e)))?;

    let mut children = read_dir
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()?;
    children.sort();

    Ok(children)
}
