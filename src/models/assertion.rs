//! Balance assertion model
//!
//! An assertion entry states the known balance of one or more accounts at a
//! date. Older entry files carry a single assertion map instead of a list;
//! both are accepted.

use serde::{Deserialize, Deserializer, Serialize};

use super::amount::PostingAmount;

/// The asserted balance of one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAssertion {
    pub account: String,
    pub amount: PostingAmount,
}

impl AccountAssertion {
    pub fn new(account: impl Into<String>, amount: impl Into<PostingAmount>) -> Self {
        Self {
            account: account.into(),
            amount: amount.into(),
        }
    }
}

/// A dated group of balance assertions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertAccount {
    pub date: String,

    #[serde(deserialize_with = "one_or_many")]
    pub assert: Vec<AccountAssertion>,
}

impl AssertAccount {
    pub fn new(date: impl Into<String>, assert: Vec<AccountAssertion>) -> Self {
        Self {
            date: date.into(),
            assert,
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<AccountAssertion>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(AccountAssertion),
        Many(Vec<AccountAssertion>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(assertion) => vec![assertion],
        OneOrMany::Many(assertions) => assertions,
    })
}
