//! Journal entries
//!
//! Entry files hold a mix of transactions and balance assertions. An entry
//! with `postings` is a transaction, even when it also carries a legacy
//! `assert: true` flag; otherwise an entry with `assert` is an assertion.

use serde::{Deserialize, Serialize};

use super::assertion::AssertAccount;
use super::transaction::Transaction;

/// One entry of an account journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JournalEntry {
    Transaction(Transaction),
    Assertion(AssertAccount),
}

impl JournalEntry {
    /// Entry date as written
    pub fn date(&self) -> &str {
        match self {
            Self::Transaction(txn) => &txn.date,
            Self::Assertion(assertion) => &assertion.date,
        }
    }

    pub fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            Self::Transaction(txn) => Some(txn),
            Self::Assertion(_) => None,
        }
    }
}

impl From<Transaction> for JournalEntry {
    fn from(txn: Transaction) -> Self {
        Self::Transaction(txn)
    }
}

impl From<AssertAccount> for JournalEntry {
    fn from(assertion: AssertAccount) -> Self {
        Self::Assertion(assertion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_entries() {
        let entries: Vec<JournalEntry> = serde_yaml::from_str(
            r#"
- date: 2019-12-10
  item: 'Invoice'
  postings:
    - { account: triodos, amount: 100 }
    - { account: 'income:???' }

- date: 2019-12-11
  assert:
    - { account: triodos, amount: 200 }

- date: 2019-12-12
  item: 'Legacy'
  assert: true
  postings:
    - { account: n26, amount: -5 }
    - { account: 'expenses:???' }
"#,
        )
        .unwrap();

        assert!(matches!(entries[0], JournalEntry::Transaction(_)));
        assert!(matches!(entries[1], JournalEntry::Assertion(_)));
        assert!(matches!(entries[2], JournalEntry::Transaction(_)));
        assert_eq!(entries[1].date(), "2019-12-11");
        assert_eq!(entries[2].as_transaction().map(|t| t.item.as_str()), Some("Legacy"));
    }
}
