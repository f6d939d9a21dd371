//! Bank CSV import
//!
//! Turns bank exports into transactions with two postings: the bank account
//! with the amount, and a placeholder (`expenses:???` or `income:???`) left
//! for the categorizer to fill in.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;

use crate::error::{KontuakError, KontuakResult};
use crate::models::{Posting, PostingEntry, Transaction};

/// Placeholder for outflows
pub const EXPENSES_PLACEHOLDER: &str = "expenses:???";
/// Placeholder for inflows
pub const INCOME_PLACEHOLDER: &str = "income:???";

const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Supported bank export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankFormat {
    /// `;` separated, `DD/MM/YYYY` dates, `1.234,56` amounts, newest first
    Triodos,
    /// `,` separated, ISO dates, `1234.56` amounts, oldest first
    N26,
}

impl BankFormat {
    /// Account of the bank posting when none is given
    pub fn default_account(self) -> &'static str {
        match self {
            Self::Triodos => "triodos:cash",
            Self::N26 => "n26",
        }
    }

    /// Entry tree directory of imported files when none is given
    pub fn default_dir(self) -> &'static str {
        match self {
            Self::Triodos => "triodos",
            Self::N26 => "n26",
        }
    }

    fn delimiter(self) -> u8 {
        match self {
            Self::Triodos => b';',
            Self::N26 => b',',
        }
    }

    /// Parse a bank export
    ///
    /// The header row is skipped. Transactions come out newest first, the
    /// order entry files use.
    pub fn parse_csv(self, csv: &str, options: &ImportOptions) -> KontuakResult<Vec<Transaction>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter())
            .has_headers(true)
            .from_reader(csv.as_bytes());

        let mut txns = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            // Header is line 1
            let line = idx + 2;
            let record = result.map_err(|e| row_error(line, e))?;

            let txn = match self {
                Self::Triodos => parse_triodos_record(&record, &options.account),
                Self::N26 => parse_n26_record(&record, &options.account),
            }
            .map_err(|e| row_error(line, e))?;

            txns.push(txn);
        }

        if self == Self::N26 {
            txns.reverse();
        }

        log::info!("Parsed {} {} transactions", txns.len(), self);

        Ok(txns)
    }
}

impl fmt::Display for BankFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Triodos => write!(f, "triodos"),
            Self::N26 => write!(f, "n26"),
        }
    }
}

impl FromStr for BankFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "triodos" => Ok(Self::Triodos),
            "n26" => Ok(Self::N26),
            other => Err(format!("Unknown bank format '{}', expected triodos or n26", other)),
        }
    }
}

/// Import configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Account of the bank posting
    pub account: String,
}

impl ImportOptions {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }

    /// Options with the format's default account
    pub fn for_format(format: BankFormat) -> Self {
        Self::new(format.default_account())
    }
}

fn row_error(line: usize, err: impl fmt::Display) -> KontuakError {
    KontuakError::Import(format!("line {}: {}", line, err))
}

fn field<'r>(record: &'r StringRecord, idx: usize, name: &str) -> Result<&'r str, String> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| format!("missing {} column", name))
}

fn placeholder(amount: Decimal) -> &'static str {
    if amount < Decimal::ZERO {
        EXPENSES_PLACEHOLDER
    } else {
        INCOME_PLACEHOLDER
    }
}

fn bank_transaction(date: String, item: String, bank: Posting, amount: Decimal) -> Transaction {
    let postings: Vec<PostingEntry> = vec![bank.into(), Posting::new(placeholder(amount)).into()];
    Transaction::new(date, item, postings)
}

/// Convert a `DD/MM/YYYY` date to `YYYY-MM-DD`
fn parse_dmy_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .map(|date| date.format(ENTRY_DATE_FORMAT).to_string())
        .map_err(|_| format!("could not parse date '{}'", s))
}

fn parse_iso_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, ENTRY_DATE_FORMAT)
        .map(|date| date.format(ENTRY_DATE_FORMAT).to_string())
        .map_err(|_| format!("could not parse date '{}'", s))
}

/// Parse `-1.234,56` style amounts
fn parse_spanish_amount(s: &str) -> Result<Decimal, String> {
    let normalized = s.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| format!("could not parse amount '{}'", s))
}

fn parse_amount(s: &str) -> Result<Decimal, String> {
    Decimal::from_str(s).map_err(|_| format!("could not parse amount '{}'", s))
}

/// Columns: `_, date, dateValue, item, amount, total`
fn parse_triodos_record(record: &StringRecord, account: &str) -> Result<Transaction, String> {
    let date = parse_dmy_date(field(record, 1, "date")?)?;
    let date_value = parse_dmy_date(field(record, 2, "value date")?)?;
    let item = field(record, 3, "concept")?.to_string();
    let amount = parse_spanish_amount(field(record, 4, "amount")?)?;

    let bank = Posting::with_amount(account, amount).with_date_value(date_value);

    Ok(bank_transaction(date, item, bank, amount))
}

/// Columns: `date, payee, _, type, item, category, amount, foreignAmount,
/// foreignCurrency, exchangeRate`
fn parse_n26_record(record: &StringRecord, account: &str) -> Result<Transaction, String> {
    let date = parse_iso_date(field(record, 0, "date")?)?;
    let payee = field(record, 1, "payee")?;
    let kind = field(record, 3, "transaction type")?;
    let reference = field(record, 4, "payment reference")?;
    let category = field(record, 5, "category")?;
    let amount = parse_amount(field(record, 6, "amount")?)?;
    let foreign_amount = field(record, 7, "foreign amount")?;
    let foreign_currency = field(record, 8, "foreign currency")?;

    let item = if reference.is_empty() {
        format!("{} {} ({})", payee, kind, category)
    } else {
        reference.to_string()
    };

    let mut bank = Posting::with_amount(account, amount);
    if !foreign_amount.is_empty() && foreign_currency != "EUR" {
        bank = bank.with_foreign(parse_amount(foreign_amount)?, foreign_currency);
    }

    Ok(bank_transaction(date, item, bank, amount))
}
