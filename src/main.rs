use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use kontuak::cli::{
    handle_import_command, handle_render_command, handle_update_command, ImportArgs, UpdateArgs,
};
use kontuak::config::{paths::KontuakPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "kontuak",
    version,
    about = "Compile YAML bookkeeping entries into hledger journals",
    long_about = "kontuak keeps bookkeeping entries as monthly YAML files per account, \
                  imports bank CSV exports into that format, and renders everything \
                  into plain-text hledger journals."
)]
struct Cli {
    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every account journal from the entry tree
    Update(UpdateArgs),

    /// Import a bank CSV export as a temporary entry file
    Import(ImportArgs),

    /// Render one entry file to stdout
    Render {
        /// Path to the YAML entry file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    kontuak::logging::init(cli.verbose);

    let paths = KontuakPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Update(args)) => {
            handle_update_command(&paths, &settings, args).context("update failed")?;
        }
        Some(Commands::Import(args)) => {
            let file = args.file.clone();
            handle_import_command(&paths, &settings, args)
                .with_context(|| format!("import of {} failed", file.display()))?;
        }
        Some(Commands::Render { file }) => {
            handle_render_command(&file, &settings)
                .with_context(|| format!("rendering {} failed", file.display()))?;
        }
        Some(Commands::Config) => {
            println!("kontuak Configuration");
            println!("=====================");
            println!("Base directory:     {}", paths.base_dir().display());
            println!("Journals directory: {}", paths.journals_dir().display());
            println!("Settings file:      {}", paths.settings_file().display());
            println!("Rules file:         {}", paths.rules_file(&settings.rules_file).display());
            println!();
            println!("Settings:");
            println!("  Currency:         {}", settings.currency_symbol);
            println!("  Start year:       {}", settings.start_year);
            println!("  Amount precision: {:?}", settings.amount_precision);
        }
        None => {
            println!("kontuak - YAML bookkeeping to hledger journals");
            println!();
            println!("Run 'kontuak --help' for usage information.");
        }
    }

    Ok(())
}
