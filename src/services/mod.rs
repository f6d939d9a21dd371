//! Service layer for kontuak
//!
//! The service layer holds the transformations between parsing and
//! rendering: bank imports, rule based categorization and the half shortcut.

pub mod categorizer;
pub mod half;
pub mod import;

pub use categorizer::Categorizer;
pub use half::{resolve_half, resolve_half_with};
pub use import::{BankFormat, ImportOptions};
