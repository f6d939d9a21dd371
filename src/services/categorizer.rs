//! Rule based categorization
//!
//! Imported transactions arrive with a bank posting carrying the amount and
//! a placeholder posting such as `expenses:???`. The categorizer rewrites
//! them with the first rule whose `test` appears in the item.

use crate::models::{CategoryRule, Posting, PostingAmount, Transaction};

/// Applies an ordered list of rules to transactions
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Categorizer {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Categorize one transaction, returning the rewritten copy
    ///
    /// Only the first matching rule is considered. When the transaction lacks
    /// a posting with an amount or one without, it is returned unchanged;
    /// later rules are not tried since they would need the same postings.
    pub fn categorize(&self, txn: &Transaction) -> Transaction {
        let Some(rule) = self.rules.iter().find(|rule| rule.matches(&txn.item)) else {
            return txn.clone();
        };

        match apply_rule(rule, txn) {
            Some(categorized) => {
                log::debug!("{} {}: matched rule '{}'", txn.date, txn.item, rule.test);
                categorized
            }
            None => {
                log::debug!(
                    "{} {}: rule '{}' matched but the postings don't fit it",
                    txn.date,
                    txn.item,
                    rule.test
                );
                txn.clone()
            }
        }
    }

    /// Categorize a batch of transactions, keeping their order
    pub fn categorize_all(&self, txns: &[Transaction]) -> Vec<Transaction> {
        txns.iter().map(|txn| self.categorize(txn)).collect()
    }
}

/// Index of the first posting carrying an amount
fn amount_posting(txn: &Transaction) -> Option<usize> {
    find_posting(txn, Posting::has_amount)
}

/// Index of the first posting without an amount
fn category_posting(txn: &Transaction) -> Option<usize> {
    find_posting(txn, |posting| !posting.has_amount())
}

fn find_posting(txn: &Transaction, pred: impl Fn(&Posting) -> bool) -> Option<usize> {
    txn.postings
        .iter()
        .position(|entry| entry.as_posting().is_some_and(&pred))
}

fn apply_rule(rule: &CategoryRule, txn: &Transaction) -> Option<Transaction> {
    let amount_idx = amount_posting(txn)?;
    let category_idx = category_posting(txn)?;

    let mut categorized = txn.clone();

    if let Some(posting) = categorized.postings[amount_idx].as_posting_mut() {
        if let Some(multiplier) = rule.amount_multiplier {
            if let Some(value) = posting.amount.as_ref().and_then(PostingAmount::as_plain_number) {
                match value.checked_mul(multiplier) {
                    Some(scaled) => posting.amount = Some(PostingAmount::Number(scaled)),
                    None => log::warn!(
                        "{} {}: {} * {} overflows, amount left as is",
                        txn.date,
                        txn.item,
                        value,
                        multiplier
                    ),
                }
            }
        }

        if let Some(account) = &rule.account {
            posting.account = account.clone();
        }
    }

    if let Some(category) = &rule.category {
        if let Some(posting) = categorized.postings[category_idx].as_posting_mut() {
            posting.account = category.clone();
        }
    }

    categorized.postings.extend(rule.add_postings.iter().cloned());

    Some(categorized)
}
