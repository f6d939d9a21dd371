//! Posting model
//!
//! A posting is one leg of a transaction. Entry files may also use the half
//! shortcut, `{ half: account }`, which stands for a posting to `account` of
//! minus half the transaction's amount. It is replaced before rendering.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::{decimal_number, PostingAmount};

/// One account/amount leg of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    /// Colon separated account path, e.g. `expenses:food:groceries`
    pub account: String,

    /// Amount; absent means "balance this transaction"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<PostingAmount>,

    /// Settlement date when it differs from the booking date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_value: Option<String>,

    /// Amount in the original currency of a card payment
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_decimal"
    )]
    pub foreign_amount: Option<Decimal>,

    /// Original currency of a card payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_currency: Option<String>,
}

impl Posting {
    /// Create a posting without amount
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            amount: None,
            date_value: None,
            foreign_amount: None,
            foreign_currency: None,
        }
    }

    /// Create a posting with an amount
    pub fn with_amount(account: impl Into<String>, amount: impl Into<PostingAmount>) -> Self {
        let mut posting = Self::new(account);
        posting.amount = Some(amount.into());
        posting
    }

    /// Set the settlement date
    pub fn with_date_value(mut self, date_value: impl Into<String>) -> Self {
        self.date_value = Some(date_value.into());
        self
    }

    /// Set the foreign currency amount
    pub fn with_foreign(mut self, amount: Decimal, currency: impl Into<String>) -> Self {
        self.foreign_amount = Some(amount);
        self.foreign_currency = Some(currency.into());
        self
    }

    /// Check if the posting carries an amount
    pub fn has_amount(&self) -> bool {
        self.amount.is_some()
    }
}

/// The half shortcut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingHalf {
    /// Account receiving minus half of the transaction amount
    pub half: String,
}

impl PostingHalf {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            half: account.into(),
        }
    }
}

/// A posting line as it appears in entry files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostingEntry {
    Posting(Posting),
    Half(PostingHalf),
}

impl PostingEntry {
    /// The concrete posting, if this isn't a half shortcut
    pub fn as_posting(&self) -> Option<&Posting> {
        match self {
            Self::Posting(posting) => Some(posting),
            Self::Half(_) => None,
        }
    }

    pub fn as_posting_mut(&mut self) -> Option<&mut Posting> {
        match self {
            Self::Posting(posting) => Some(posting),
            Self::Half(_) => None,
        }
    }

    pub fn is_half(&self) -> bool {
        matches!(self, Self::Half(_))
    }
}

impl From<Posting> for PostingEntry {
    fn from(posting: Posting) -> Self {
        Self::Posting(posting)
    }
}

impl From<PostingHalf> for PostingEntry {
    fn from(half: PostingHalf) -> Self {
        Self::Half(half)
    }
}

mod optional_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::decimal_number;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(n) => decimal_number::serialize(n, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "decimal_number")] Decimal);

        Option::<Wrapper>::deserialize(deserializer).map(|w| w.map(|Wrapper(n)| n))
    }
}
