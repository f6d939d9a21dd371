//! YAML entry files
//!
//! Entry files are YAML sequences of transactions and balance assertions,
//! one file per account and month. Rules files are YAML sequences of
//! categorization rules.

use std::io::Write;

use crate::error::KontuakResult;
use crate::models::{CategoryRule, JournalEntry, Transaction};

/// Parse an entry file
///
/// An empty file holds no entries.
pub fn load_entries(yaml: &str) -> KontuakResult<Vec<JournalEntry>> {
    let entries: Option<Vec<JournalEntry>> = serde_yaml::from_str(yaml)?;
    Ok(entries.unwrap_or_default())
}

/// Parse a rules file
pub fn load_rules(yaml: &str) -> KontuakResult<Vec<CategoryRule>> {
    let rules: Option<Vec<CategoryRule>> = serde_yaml::from_str(yaml)?;
    Ok(rules.unwrap_or_default())
}

/// Write transactions in the entry file format
///
/// A posting's `dateValue` is left out when it matches the transaction date.
pub fn export_transactions_yaml<W: Write>(txns: &[Transaction], writer: &mut W) -> KontuakResult<()> {
    let txns: Vec<Transaction> = txns.iter().map(without_redundant_date_values).collect();

    serde_yaml::to_writer(writer, &txns)?;

    Ok(())
}

fn without_redundant_date_values(txn: &Transaction) -> Transaction {
    let mut txn = txn.clone();
    let date = txn.date.clone();

    for entry in txn.postings.iter_mut() {
        if let Some(posting) = entry.as_posting_mut() {
            if posting.date_value.as_deref() == Some(date.as_str()) {
                posting.date_value = None;
            }
        }
    }

    txn
}
