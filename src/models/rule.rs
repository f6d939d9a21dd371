//! Categorization rule model
//!
//! Rules are matched in order against a transaction's item. The first rule
//! whose `test` is a substring of the item rewrites the transaction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::decimal_number;
use super::posting::PostingEntry;

/// A substring-matching rewrite rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRule {
    /// Case-sensitive substring searched in the transaction item
    pub test: String,

    /// New account for the posting without amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// New account for the posting with amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Factor applied to a plain numeric amount
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "multiplier"
    )]
    pub amount_multiplier: Option<Decimal>,

    /// Postings appended to the transaction
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_postings: Vec<PostingEntry>,
}

impl CategoryRule {
    /// Create a rule that only sets the category
    pub fn new(test: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            category: Some(category.into()),
            account: None,
            amount_multiplier: None,
            add_postings: Vec::new(),
        }
    }

    /// Check whether the rule applies to an item
    pub fn matches(&self, item: &str) -> bool {
        item.contains(self.test.as_str())
    }
}

fn multiplier<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    decimal_number::deserialize(deserializer).map(Some)
}
