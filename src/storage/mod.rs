//! Storage layer for kontuak
//!
//! Provides the entry tree loader and atomic text writes with automatic
//! directory creation.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_text, write_text_atomic};
pub use ledger::{import_file_path, Ledger};
