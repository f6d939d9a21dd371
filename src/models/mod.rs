//! Core data models for kontuak
//!
//! This module contains the data structures of the entry files: amounts,
//! postings, transactions, balance assertions and categorization rules.
//! Shapes are decided once, when an entry file is deserialized.

pub mod amount;
pub mod assertion;
pub mod journal;
pub mod posting;
pub mod rule;
pub mod transaction;

pub use amount::{
    format_amount, parse_amount, parse_amount_in, Amount, AmountPrecision, PostingAmount,
    DEFAULT_CURRENCY,
};
pub use assertion::{AccountAssertion, AssertAccount};
pub use journal::JournalEntry;
pub use posting::{Posting, PostingEntry, PostingHalf};
pub use rule::CategoryRule;
pub use transaction::Transaction;
