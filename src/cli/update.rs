//! Update CLI command
//!
//! Rebuilds every account journal from the entry tree.

use chrono::Datelike;
use clap::Args;

use crate::config::{KontuakPaths, Settings};
use crate::error::{KontuakError, KontuakResult};
use crate::export::JournalRenderer;
use crate::storage::Ledger;

/// Arguments of the update command
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// First year to load (defaults to the start_year setting)
    #[arg(long)]
    pub from: Option<i32>,
    /// Last year to load (defaults to the current year)
    #[arg(long)]
    pub to: Option<i32>,
}

/// Handle the update command
pub fn handle_update_command(
    paths: &KontuakPaths,
    settings: &Settings,
    args: UpdateArgs,
) -> KontuakResult<()> {
    let from = args.from.unwrap_or(settings.start_year);
    let to = args.to.unwrap_or_else(|| chrono::Local::now().year());

    if from > to {
        return Err(KontuakError::Config(format!(
            "--from {} is after --to {}",
            from, to
        )));
    }

    let ledger = Ledger::load(paths, from..=to)?;
    if ledger.is_empty() {
        println!("No entries found in {} for {}-{}", paths.base_dir().display(), from, to);
        return Ok(());
    }

    let renderer = JournalRenderer::new(settings.render_options());
    for path in ledger.write_journals(paths, &renderer)? {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
