//! Export module for kontuak
//!
//! Provides the two output formats:
//! - Journal: hledger plain-text journals
//! - YAML: the per-month entry files written by imports

pub mod journal;
pub mod yaml;

pub use journal::{render_journal, JournalRenderer, RenderOptions};
pub use yaml::{export_transactions_yaml, load_entries, load_rules};
