//! Transaction model
//!
//! A dated, described set of postings. Dates are kept as the text the entry
//! file carried so the journal reproduces them byte for byte.

use serde::{Deserialize, Serialize};

use super::posting::{Posting, PostingEntry};

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Booking date (YYYY-MM-DD)
    pub date: String,

    /// Excluded from the journal when set
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,

    /// Free text description
    pub item: String,

    /// Tags rendered as a trailing comment on the header line
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Postings, possibly including a half shortcut
    pub postings: Vec<PostingEntry>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: impl Into<String>, item: impl Into<String>, postings: Vec<PostingEntry>) -> Self {
        Self {
            date: date.into(),
            ignore: false,
            item: item.into(),
            tags: Vec::new(),
            postings,
        }
    }

    /// Add tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the transaction as ignored
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Concrete postings, half shortcuts skipped
    pub fn postings(&self) -> impl Iterator<Item = &Posting> {
        self.postings.iter().filter_map(PostingEntry::as_posting)
    }

    /// Check if the transaction uses the half shortcut
    pub fn has_half(&self) -> bool {
        self.postings.iter().any(PostingEntry::is_half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::posting::PostingHalf;

    fn sample() -> Transaction {
        Transaction::new(
            "2019-12-10",
            "Lorem ipsum",
            vec![
                Posting::with_amount("foo", 10).into(),
                Posting::new("bar").into(),
                PostingHalf::new("ignore-this").into(),
            ],
        )
    }

    #[test]
    fn test_postings_skip_half() {
        let txn = sample();
        let accounts: Vec<&str> = txn.postings().map(|p| p.account.as_str()).collect();
        assert_eq!(accounts, vec!["foo", "bar"]);
        assert!(txn.has_half());
    }

    #[test]
    fn test_deserialize() {
        let txn: Transaction = serde_yaml::from_str(
            "date: 2019-12-10\nitem: 'Lorem ipsum'\ntags: [a-tag]\npostings:\n  - { account: foo, amount: 10 }\n  - { account: bar }\n  - { half: ignore-this }\n",
        )
        .unwrap();
        assert_eq!(txn, sample().with_tags(["a-tag"]));
        assert!(!txn.ignore);
    }

    #[test]
    fn test_serialize_skips_defaults() {
        let txn = Transaction::new("2019-12-10", "Rent", vec![Posting::new("bar").into()]);
        let yaml = serde_yaml::to_string(&txn).unwrap();
        assert!(!yaml.contains("ignore"));
        assert!(!yaml.contains("tags"));

        let yaml = serde_yaml::to_string(&txn.ignored()).unwrap();
        assert!(yaml.contains("ignore: true"));
    }
}
