//! CLI command handler for bank CSV import
//!
//! Parses a bank export, categorizes it with the rules file and writes the
//! result as a temporary entry file for review.

use std::path::PathBuf;

use clap::Args;

use crate::config::{KontuakPaths, Settings};
use crate::error::KontuakResult;
use crate::export::{export_transactions_yaml, load_rules};
use crate::services::{BankFormat, Categorizer, ImportOptions};
use crate::storage::{import_file_path, read_text, write_text_atomic};

/// Arguments of the import command
#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Bank export format (triodos, n26)
    pub format: BankFormat,
    /// Path to the CSV file
    pub file: PathBuf,
    /// Account of the bank posting
    #[arg(short, long)]
    pub account: Option<String>,
    /// Entry tree directory to write to
    #[arg(short, long)]
    pub dir: Option<String>,
    /// Print the entries instead of writing them
    #[arg(long)]
    pub stdout: bool,
}

/// Handle the import command
pub fn handle_import_command(
    paths: &KontuakPaths,
    settings: &Settings,
    args: ImportArgs,
) -> KontuakResult<()> {
    let options = match args.account {
        Some(account) => ImportOptions::new(account),
        None => ImportOptions::for_format(args.format),
    };

    let csv = read_text(&args.file)?;
    let txns = args.format.parse_csv(&csv, &options)?;

    let Some(first) = txns.first() else {
        println!("No transactions found in {}", args.file.display());
        return Ok(());
    };

    let categorizer = load_categorizer(paths, settings)?;
    let txns = categorizer.categorize_all(&txns);

    let mut out = Vec::new();
    export_transactions_yaml(&txns, &mut out)?;
    let yaml = String::from_utf8_lossy(&out);

    if args.stdout {
        print!("{}", yaml);
        return Ok(());
    }

    let dir = args.dir.as_deref().unwrap_or(args.format.default_dir());
    let path = import_file_path(paths, dir, &first.date)?;
    write_text_atomic(&path, &yaml)?;

    println!("Imported {} transactions to {}", txns.len(), path.display());

    Ok(())
}

/// Categorizer for the configured rules file, empty when the file is missing
pub fn load_categorizer(paths: &KontuakPaths, settings: &Settings) -> KontuakResult<Categorizer> {
    let rules_path = paths.rules_file(&settings.rules_file);

    if !rules_path.exists() {
        log::warn!(
            "No rules file at {}, transactions stay uncategorized",
            rules_path.display()
        );
        return Ok(Categorizer::default());
    }

    let rules = load_rules(&read_text(&rules_path)?)?;
    log::info!("Loaded {} rules from {}", rules.len(), rules_path.display());

    Ok(Categorizer::new(rules))
}
