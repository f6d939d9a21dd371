//! kontuak - YAML bookkeeping entries compiled into hledger journals
//!
//! This library provides the core functionality of the kontuak tool. Entries
//! are kept as monthly YAML files per account; bank exports are imported into
//! that format and categorized by rules; everything is rendered into
//! deterministic plain-text hledger journals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Amounts, postings, transactions, assertions and rules
//! - `services`: Half shortcut, categorization and bank imports
//! - `export`: Journal rendering and YAML entry files
//! - `storage`: Entry tree loading and atomic writes
//! - `cli`: Command handlers of the `kontuak` binary
//! - `logging`: The stderr logger used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use kontuak::config::{paths::KontuakPaths, settings::Settings};
//! use kontuak::export::JournalRenderer;
//! use kontuak::storage::Ledger;
//!
//! let paths = KontuakPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::load(&paths, settings.start_year..=2024)?;
//! ledger.write_journals(&paths, &JournalRenderer::new(settings.render_options()))?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{KontuakError, KontuakResult};
