//! Custom error types for kontuak
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for kontuak operations
#[derive(Error, Debug)]
pub enum KontuakError {
    /// Money text that is ambiguous or has no numeric part
    #[error("Malformed amount: {0}")]
    MalformedAmount(String),

    /// A half shortcut whose transaction doesn't have exactly one amount to split
    #[error(
        "Half shortcut needs exactly one posting with an amount, found {found} \
         (date={date}, item={item})"
    )]
    HalfShortcutArity {
        date: String,
        item: String,
        found: usize,
    },

    /// More than one half shortcut in the same transaction
    #[error("Only one half shortcut is allowed per transaction (date={date}, item={item})")]
    DuplicateHalfShortcut { date: String, item: String },

    /// Failure while rendering one journal entry
    #[error("{source}. {kind}: date={date}, {field}={value}")]
    Render {
        kind: &'static str,
        date: String,
        field: &'static str,
        value: String,
        #[source]
        source: Box<KontuakError>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bank export import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KontuakError {
    /// Create a malformed amount error for the given raw text
    pub fn malformed_amount(raw: impl Into<String>) -> Self {
        Self::MalformedAmount(raw.into())
    }

    /// Wrap an error with the transaction it was raised for
    pub fn in_transaction(date: &str, item: &str, source: KontuakError) -> Self {
        Self::Render {
            kind: "Transaction",
            date: date.to_string(),
            field: "item",
            value: item.to_string(),
            source: Box::new(source),
        }
    }

    /// Wrap an error with the account assertion it was raised for
    pub fn in_assertion(date: &str, account: &str, source: KontuakError) -> Self {
        Self::Render {
            kind: "AssertAccount",
            date: date.to_string(),
            field: "account",
            value: account.to_string(),
            source: Box::new(source),
        }
    }

    /// Check if this is an amount parsing error, directly or inside a render error
    pub fn is_malformed_amount(&self) -> bool {
        match self {
            Self::MalformedAmount(_) => true,
            Self::Render { source, .. } => source.is_malformed_amount(),
            _ => false,
        }
    }

    /// Check if this is a half shortcut error, directly or inside a render error
    pub fn is_half_shortcut(&self) -> bool {
        match self {
            Self::HalfShortcutArity { .. } | Self::DuplicateHalfShortcut { .. } => true,
            Self::Render { source, .. } => source.is_half_shortcut(),
            _ => false,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for KontuakError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KontuakError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for KontuakError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for KontuakError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for kontuak operations
pub type KontuakResult<T> = Result<T, KontuakError>;
