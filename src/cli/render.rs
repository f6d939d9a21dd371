//! Render CLI command
//!
//! Renders a single entry file to stdout, handy to check a file before
//! running `update`.

use std::path::Path;

use crate::config::Settings;
use crate::error::KontuakResult;
use crate::export::{load_entries, JournalRenderer};
use crate::storage::read_text;

/// Render an entry file to journal text
pub fn render_file(path: &Path, settings: &Settings) -> KontuakResult<String> {
    let entries = load_entries(&read_text(path)?)?;
    JournalRenderer::new(settings.render_options()).render(&entries)
}

/// Handle the render command
pub fn handle_render_command(path: &Path, settings: &Settings) -> KontuakResult<()> {
    print!("{}", render_file(path, settings)?);
    Ok(())
}
