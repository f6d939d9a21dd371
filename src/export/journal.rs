//! hledger journal rendering
//!
//! Turns journal entries into the plain-text format read by hledger:
//!
//! ```text
//! 2019-12-05 RECIBO Mobile ; phone:
//!     triodos:cash  -40€ ; DATE_VALUE=2019-12-03
//!     expenses:phone
//!
//! 2019-12-31
//!     triodos:cash  0 =* 160€
//! ```
//!
//! Postings are indented by four spaces, amounts are separated from the
//! account by two, entries by one blank line, and the text ends with a single
//! newline. The output is meant to be kept under version control, so it only
//! depends on the entries and their order.

use crate::error::{KontuakError, KontuakResult};
use crate::models::{
    parse_amount_in, AmountPrecision, AssertAccount, JournalEntry, Posting, PostingAmount,
    Transaction, DEFAULT_CURRENCY,
};
use crate::services::half::resolve_half_with;

const INDENT: &str = "    ";

/// Options for journal rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Currency for bare numbers
    pub home_currency: String,
    /// Rounding of printed and computed amounts
    pub precision: AmountPrecision,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            home_currency: DEFAULT_CURRENCY.to_string(),
            precision: AmountPrecision::Preserve,
        }
    }
}

/// Renders journal entries
#[derive(Debug, Clone, Default)]
pub struct JournalRenderer {
    options: RenderOptions,
}

impl JournalRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a full journal
    ///
    /// Ignored transactions leave no trace. The first failing entry aborts
    /// rendering with an error naming it.
    pub fn render(&self, entries: &[JournalEntry]) -> KontuakResult<String> {
        let blocks = entries
            .iter()
            .filter_map(|entry| match entry {
                JournalEntry::Transaction(txn) if txn.ignore => None,
                JournalEntry::Transaction(txn) => Some(
                    self.render_transaction(txn)
                        .map_err(|e| KontuakError::in_transaction(&txn.date, &txn.item, e)),
                ),
                JournalEntry::Assertion(assertion) => Some(self.render_assertion(assertion)),
            })
            .collect::<KontuakResult<Vec<String>>>()?;

        Ok(blocks.join("\n\n") + "\n")
    }

    /// Render one transaction, without trailing newline
    ///
    /// Ignored transactions render as an empty string.
    pub fn render_transaction(&self, txn: &Transaction) -> KontuakResult<String> {
        if txn.ignore {
            return Ok(String::new());
        }

        let txn = resolve_half_with(txn, self.options.precision, &self.options.home_currency)?;

        let mut header = format!("{} {}", txn.date, txn.item);
        if !txn.tags.is_empty() {
            let tags: Vec<String> = txn.tags.iter().map(|tag| format!("{}:", tag)).collect();
            header.push_str(" ; ");
            header.push_str(&tags.join(" "));
        }

        let mut lines = vec![header];
        for posting in txn.postings() {
            lines.push(self.render_posting(posting, &txn.date)?);
        }

        Ok(lines.join("\n"))
    }

    /// Render one balance assertion entry, without trailing newline
    pub fn render_assertion(&self, assertion: &AssertAccount) -> KontuakResult<String> {
        let mut lines = vec![assertion.date.clone()];

        for account in &assertion.assert {
            let amount = self
                .format(&account.amount)
                .map_err(|e| KontuakError::in_assertion(&assertion.date, &account.account, e))?;
            lines.push(format!("{}{}  0 =* {}", INDENT, account.account, amount));
        }

        Ok(lines.join("\n"))
    }

    fn render_posting(&self, posting: &Posting, txn_date: &str) -> KontuakResult<String> {
        let mut line = format!("{}{}", INDENT, posting.account);

        if let Some(amount) = &posting.amount {
            line.push_str("  ");
            line.push_str(&self.format(amount)?);
        }

        if let Some(date_value) = posting.date_value.as_deref() {
            if date_value != txn_date {
                line.push_str(" ; DATE_VALUE=");
                line.push_str(date_value);
            }
        }

        Ok(line)
    }

    fn format(&self, amount: &PostingAmount) -> KontuakResult<String> {
        let amount = parse_amount_in(amount, &self.options.home_currency)?;
        Ok(self.options.precision.format(&amount))
    }
}

/// Render a journal with default options
pub fn render_journal(entries: &[JournalEntry]) -> KontuakResult<String> {
    JournalRenderer::default().render(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountAssertion, Amount, PostingHalf};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn freelance(tags: &[&str]) -> Transaction {
        Transaction::new(
            "1984-12-12",
            "Lorem ipsum dolor sit amet",
            vec![
                Posting::with_amount("triodos", 100).into(),
                Posting::new("income:freelance").into(),
            ],
        )
        .with_tags(tags.iter().copied())
    }

    fn render_one(txn: &Transaction) -> String {
        JournalRenderer::default().render_transaction(txn).unwrap()
    }

    #[test]
    fn test_regular_transaction() {
        assert_eq!(
            render_one(&freelance(&[])),
            "1984-12-12 Lorem ipsum dolor sit amet\n    triodos  100€\n    income:freelance"
        );
    }

    #[test]
    fn test_tags() {
        assert_eq!(
            render_one(&freelance(&["a-tag"])),
            "1984-12-12 Lorem ipsum dolor sit amet ; a-tag:\n    triodos  100€\n    income:freelance"
        );
        assert_eq!(
            render_one(&freelance(&["tag-one", "tag-two"])),
            "1984-12-12 Lorem ipsum dolor sit amet ; tag-one: tag-two:\n    triodos  100€\n    income:freelance"
        );
    }

    #[test]
    fn test_half_shortcut() {
        let txn = Transaction::new(
            "1984-12-12",
            "Half postings shortcut",
            vec![
                Posting::with_amount("triodos", -100).into(),
                PostingHalf::new("owe:joxepo:rent").into(),
                Posting::new("expenses:home:rent").into(),
            ],
        );
        assert_eq!(
            render_one(&txn),
            "1984-12-12 Half postings shortcut\n    triodos  -100€\n    owe:joxepo:rent  50€\n    expenses:home:rent"
        );

        let cents = JournalRenderer::new(RenderOptions {
            precision: AmountPrecision::Cents,
            ..RenderOptions::default()
        });
        assert_eq!(
            cents.render_transaction(&txn).unwrap(),
            "1984-12-12 Half postings shortcut\n    triodos  -100.00€\n    owe:joxepo:rent  50.00€\n    expenses:home:rent"
        );
    }

    #[test]
    fn test_date_value_only_when_different() {
        let txn = Transaction::new(
            "2019-12-05",
            "RECIBO Mobile",
            vec![
                Posting::with_amount("triodos:cash", -40)
                    .with_date_value("2019-12-03")
                    .into(),
                Posting::new("expenses:phone").with_date_value("2019-12-05").into(),
            ],
        );
        assert_eq!(
            render_one(&txn),
            "2019-12-05 RECIBO Mobile\n    triodos:cash  -40€ ; DATE_VALUE=2019-12-03\n    expenses:phone"
        );
    }

    #[test]
    fn test_foreign_currency_amounts() {
        let txn = Transaction::new(
            "2019-12-01",
            "Bitcoin",
            vec![
                Posting::with_amount("wallet", "0.0025BTC").into(),
                Posting::with_amount(
                    "n26",
                    Amount::new(Decimal::from_str("-25.10").unwrap(), "€"),
                )
                .into(),
            ],
        );
        assert_eq!(
            render_one(&txn),
            "2019-12-01 Bitcoin\n    wallet  0.0025BTC\n    n26  -25.1€"
        );
    }

    #[test]
    fn test_assertion() {
        let assertion = AssertAccount::new(
            "1984-12-12",
            vec![AccountAssertion::new(
                "n26",
                Decimal::from_str("1234.99").unwrap(),
            )],
        );
        assert_eq!(
            JournalRenderer::default().render_assertion(&assertion).unwrap(),
            "1984-12-12\n    n26  0 =* 1234.99€"
        );
    }

    #[test]
    fn test_journal_layout() {
        let entries = vec![
            JournalEntry::from(freelance(&[])),
            JournalEntry::from(freelance(&[]).ignored()),
            JournalEntry::from(AssertAccount::new(
                "1984-12-12",
                vec![AccountAssertion::new("triodos", 100)],
            )),
            JournalEntry::from(freelance(&[]).ignored()),
        ];

        assert_eq!(
            render_journal(&entries).unwrap(),
            "1984-12-12 Lorem ipsum dolor sit amet\n    triodos  100€\n    income:freelance\n\n\
             1984-12-12\n    triodos  0 =* 100€\n"
        );
    }

    #[test]
    fn test_empty_journal() {
        assert_eq!(render_journal(&[]).unwrap(), "\n");
        let only_ignored = vec![JournalEntry::from(freelance(&[]).ignored())];
        assert_eq!(render_journal(&only_ignored).unwrap(), "\n");
        assert_eq!(render_one(&freelance(&[]).ignored()), "");
    }

    #[test]
    fn test_ignored_transaction_is_not_validated() {
        let broken = Transaction::new(
            "1984-12-12",
            "Broken",
            vec![
                Posting::with_amount("triodos", "$8VND").into(),
                PostingHalf::new("owe:x").into(),
            ],
        )
        .ignored();
        assert_eq!(render_journal(&[broken.into()]).unwrap(), "\n");
    }

    #[test]
    fn test_errors_name_the_entry() {
        let txn = Transaction::new(
            "1984-12-12",
            "Half postings shortcut",
            vec![Posting::new("triodos").into(), PostingHalf::new("owe:x").into()],
        );
        let err = render_journal(&[txn.into()]).unwrap_err();
        assert!(err.is_half_shortcut());
        assert!(err
            .to_string()
            .ends_with("Transaction: date=1984-12-12, item=Half postings shortcut"));

        let assertion = AssertAccount::new(
            "1984-12-12",
            vec![
                AccountAssertion::new("n26", 1),
                AccountAssertion::new("triodos", "$8VND"),
            ],
        );
        let err = render_journal(&[assertion.into()]).unwrap_err();
        assert!(err.is_malformed_amount());
        assert!(err
            .to_string()
            .ends_with("AssertAccount: date=1984-12-12, account=triodos"));
    }

    #[test]
    fn test_currency_less_assertion_fails() {
        let entries = crate::export::load_entries(
            "- date: 2019-12-31\n  assert:\n    - { account: n26, amount: { total: 5, currency: '' } }\n",
        )
        .unwrap();
        let err = render_journal(&entries).unwrap_err();
        assert!(err.is_malformed_amount());
        assert!(err
            .to_string()
            .ends_with("AssertAccount: date=2019-12-31, account=n26"));
    }

    #[test]
    fn test_home_currency() {
        let renderer = JournalRenderer::new(RenderOptions {
            home_currency: "$".into(),
            ..RenderOptions::default()
        });
        assert!(renderer
            .render_transaction(&freelance(&[]))
            .unwrap()
            .contains("triodos  100$"));
    }
}
