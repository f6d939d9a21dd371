//! Amount model
//!
//! Money values arrive in several shapes: plain numbers, numeric strings,
//! strings annotated with a currency (`"12.99$"`, `"¥ 100"`) or already
//! normalized `{total, currency}` maps. This module turns all of them into an
//! [`Amount`] and formats amounts back into journal text.
//!
//! Totals are exact decimals; nothing is rounded unless the
//! [`AmountPrecision::Cents`] policy is selected.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{KontuakError, KontuakResult};

/// Currency used for amounts that don't name one
pub const DEFAULT_CURRENCY: &str = "€";

/// A normalized money amount
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// Numeric total, any sign and precision
    #[serde(with = "decimal_number")]
    pub total: Decimal,

    /// Currency symbol or code, never empty
    pub currency: String,
}

impl Amount {
    /// Create an amount
    pub fn new(total: Decimal, currency: impl Into<String>) -> Self {
        Self {
            total,
            currency: currency.into(),
        }
    }

    /// Create an amount in the default currency
    pub fn euros(total: Decimal) -> Self {
        Self::new(total, DEFAULT_CURRENCY)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.total.normalize(), self.currency)
    }
}

/// A posting amount as written by hand or produced by an import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostingAmount {
    /// Already normalized amount
    Amount(Amount),
    /// Bare number, in the home currency
    Number(#[serde(with = "decimal_number")] Decimal),
    /// Text that still has to be parsed
    Text(String),
}

impl PostingAmount {
    /// Whether the amount counts as present for the half shortcut
    ///
    /// A zero number and an empty string don't.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Amount(_) => true,
            Self::Number(n) => !n.is_zero(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// The value as a plain number, when it is a number or a numeric string
    pub fn as_plain_number(&self) -> Option<Decimal> {
        match self {
            Self::Amount(_) => None,
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_plain_decimal(s.trim()),
        }
    }
}

impl From<Amount> for PostingAmount {
    fn from(amount: Amount) -> Self {
        Self::Amount(amount)
    }
}

impl From<Decimal> for PostingAmount {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for PostingAmount {
    fn from(n: i64) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl From<&str> for PostingAmount {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Rounding policy for rendered and computed amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AmountPrecision {
    /// Keep whatever precision was parsed or computed
    #[default]
    Preserve,
    /// Round half away from zero to two decimals and always print two
    Cents,
}

impl AmountPrecision {
    /// Apply the policy to a computed total
    pub fn apply(self, total: Decimal) -> Decimal {
        match self {
            Self::Preserve => total,
            Self::Cents => {
                let rounded = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                if rounded.is_zero() {
                    Decimal::ZERO
                } else {
                    rounded
                }
            }
        }
    }

    /// Format an amount under this policy
    pub fn format(self, amount: &Amount) -> String {
        match self {
            Self::Preserve => format_amount(amount),
            Self::Cents => format!("{:.2}{}", self.apply(amount.total), amount.currency),
        }
    }
}

/// Parse a posting amount, using the default currency for bare numbers
pub fn parse_amount(raw: &PostingAmount) -> KontuakResult<Amount> {
    parse_amount_in(raw, DEFAULT_CURRENCY)
}

/// Parse a posting amount, using `home_currency` for bare numbers
///
/// The resulting currency is never empty.
pub fn parse_amount_in(raw: &PostingAmount, home_currency: &str) -> KontuakResult<Amount> {
    let amount = match raw {
        PostingAmount::Amount(amount) => amount.clone(),
        PostingAmount::Number(total) => Amount::new(*total, home_currency),
        PostingAmount::Text(text) => parse_amount_text(text, home_currency)?,
    };

    if amount.currency.trim().is_empty() {
        return Err(KontuakError::malformed_amount(format!(
            "{} has no currency",
            amount.total.normalize()
        )));
    }

    Ok(amount)
}

/// Format an amount as journal text, e.g. `12.99€`
pub fn format_amount(amount: &Amount) -> String {
    amount.to_string()
}

fn parse_amount_text(text: &str, home_currency: &str) -> KontuakResult<Amount> {
    let trimmed = text.trim();

    if let Some(total) = parse_plain_decimal(trimmed) {
        return Ok(Amount::new(total, home_currency));
    }

    let parts: Vec<&str> = split_segments(trimmed)
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() > 2 {
        return Err(KontuakError::malformed_amount(text));
    }

    let totals: Vec<Decimal> = parts.iter().filter_map(|p| parse_plain_decimal(p)).collect();
    let currencies: Vec<&str> = parts
        .iter()
        .filter(|p| parse_plain_decimal(p).is_none())
        .copied()
        .collect();

    match (totals.as_slice(), currencies.as_slice()) {
        ([total], [currency]) if !is_sign_only(currency) => Ok(Amount::new(*total, *currency)),
        _ => Err(KontuakError::malformed_amount(text)),
    }
}

/// Parse `[+-]digits[.digits]`, nothing else
fn parse_plain_decimal(s: &str) -> Option<Decimal> {
    let (negative, body) = if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    };

    if !body.chars().any(|c| c.is_ascii_digit()) || !body.chars().all(is_numeric_char) {
        return None;
    }

    let value = Decimal::from_str(body).ok()?;
    Some(if negative { -value } else { value })
}

/// A stray run of signs, as in `--8`
fn is_sign_only(s: &str) -> bool {
    s.chars().all(|c| c == '-' || c == '+')
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Split text into maximal numeric and non-numeric runs
///
/// A sign directly in front of a numeric run starts that run.
fn split_segments(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (pos, &(idx, c)) in chars.iter().enumerate() {
        let signed_start = (c == '-' || c == '+')
            && current != Some(true)
            && chars
                .get(pos + 1)
                .is_some_and(|&(_, next)| is_numeric_char(next));
        let numeric = is_numeric_char(c) || signed_start;

        match current {
            Some(kind) if kind == numeric => {}
            Some(_) => {
                segments.push(&text[start..idx]);
                start = idx;
                current = Some(numeric);
            }
            None => current = Some(numeric),
        }
    }

    if current.is_some() {
        segments.push(&text[start..]);
    }

    segments
}

/// Serde glue for decimals written as YAML/JSON numbers
pub(crate) mod decimal_number {
    use std::fmt;
    use std::str::FromStr;

    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = value.normalize();
        if value.scale() == 0 {
            if let Some(n) = value.to_i64() {
                return serializer.serialize_i64(n);
            }
        }
        let n = value
            .to_f64()
            .ok_or_else(|| serde::ser::Error::custom(format!("number out of range: {}", value)))?;
        serializer.serialize_f64(n)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }

    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            if !v.is_finite() {
                return Err(E::custom(format!("not a finite number: {}", v)));
            }
            // Display gives the shortest text that reads back as `v`
            Decimal::from_str(&v.to_string()).map_err(E::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn text(s: &str) -> PostingAmount {
        PostingAmount::Text(s.to_string())
    }

    #[test]
    fn test_numbers_are_euros() {
        assert_eq!(
            parse_amount(&PostingAmount::from(8)).unwrap(),
            Amount::euros(dec("8"))
        );
        assert_eq!(
            parse_amount(&PostingAmount::Number(dec("12.99"))).unwrap(),
            Amount::euros(dec("12.99"))
        );
    }

    #[test]
    fn test_numeric_strings_are_euros() {
        assert_eq!(parse_amount(&text("8")).unwrap(), Amount::euros(dec("8")));
        assert_eq!(parse_amount(&text("12.99")).unwrap(), Amount::euros(dec("12.99")));
        assert_eq!(parse_amount(&text("-40.5")).unwrap(), Amount::euros(dec("-40.5")));
    }

    #[test]
    fn test_currency_from_string() {
        assert_eq!(parse_amount(&text("8VND")).unwrap(), Amount::new(dec("8"), "VND"));
        assert_eq!(parse_amount(&text("12.99$")).unwrap(), Amount::new(dec("12.99"), "$"));
        assert_eq!(parse_amount(&text("¥100")).unwrap(), Amount::new(dec("100"), "¥"));
        assert_eq!(
            parse_amount(&text("0.0025BTC")).unwrap(),
            Amount::new(dec("0.0025"), "BTC")
        );
    }

    #[test]
    fn test_trims_spaces() {
        assert_eq!(parse_amount(&text(" 8 VND ")).unwrap(), Amount::new(dec("8"), "VND"));
        assert_eq!(parse_amount(&text(" 12.99 $ ")).unwrap(), Amount::new(dec("12.99"), "$"));
        assert_eq!(parse_amount(&text(" ¥ 100 ")).unwrap(), Amount::new(dec("100"), "¥"));
    }

    #[test]
    fn test_signed_annotated_amounts() {
        assert_eq!(parse_amount(&text("-8VND")).unwrap(), Amount::new(dec("-8"), "VND"));
        assert_eq!(parse_amount(&text("$ -8")).unwrap(), Amount::new(dec("-8"), "$"));
    }

    #[test]
    fn test_rejects_ambiguous_amounts() {
        let err = parse_amount(&text("$8VND")).unwrap_err();
        assert!(err.is_malformed_amount());

        assert!(parse_amount(&text("")).is_err());
        assert!(parse_amount(&text("EUR")).is_err());
        assert!(parse_amount(&text("1.2.3$")).is_err());
        assert!(parse_amount(&text("8 9")).is_err());
        assert!(parse_amount(&text("1,234.56€")).is_err());
    }

    #[test]
    fn test_rejects_sign_as_currency() {
        for raw in ["--8", "8-", "+-8", "8 +"] {
            let err = parse_amount(&text(raw)).unwrap_err();
            assert!(err.is_malformed_amount(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_rejects_empty_currency() {
        let err = parse_amount(&PostingAmount::from(Amount::new(dec("5"), ""))).unwrap_err();
        assert!(err.is_malformed_amount());
        assert!(parse_amount(&PostingAmount::from(Amount::new(dec("5"), "  "))).is_err());

        let err = parse_amount_in(&PostingAmount::from(5), "").unwrap_err();
        assert!(err.is_malformed_amount());
        assert!(parse_amount_in(&text("5"), " ").is_err());
    }

    #[test]
    fn test_normalized_amount_passes_through() {
        let amount = Amount::new(dec("-3.5"), "USD");
        assert_eq!(parse_amount(&PostingAmount::from(amount.clone())).unwrap(), amount);
    }

    #[test]
    fn test_home_currency() {
        assert_eq!(
            parse_amount_in(&PostingAmount::from(5), "$").unwrap(),
            Amount::new(dec("5"), "$")
        );
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(&Amount::euros(dec("12.99"))), "12.99€");
        assert_eq!(format_amount(&Amount::euros(dec("0"))), "0€");
        assert_eq!(format_amount(&Amount::euros(dec("100.00"))), "100€");
        assert_eq!(format_amount(&Amount::new(dec("0.0025"), "BTC")), "0.0025BTC");
        assert_eq!(format_amount(&Amount::euros(dec("-50"))), "-50€");
    }

    #[test]
    fn test_round_trip() {
        for total in ["0", "1", "-1", "12.99", "-100", "0.0025", "1234.99", "-0.5"] {
            let amount = Amount::euros(dec(total));
            let formatted = format_amount(&amount);
            let parsed = parse_amount(&text(&formatted)).unwrap();
            assert_eq!(parsed, amount, "round trip of {}", formatted);
            assert_eq!(format_amount(&parsed), formatted);
        }
    }

    #[test]
    fn test_cents_precision() {
        let cents = AmountPrecision::Cents;
        assert_eq!(cents.format(&Amount::euros(dec("12.002"))), "12.00€");
        assert_eq!(cents.format(&Amount::euros(dec("12.005"))), "12.01€");
        assert_eq!(cents.format(&Amount::euros(dec("12.008"))), "12.01€");
        assert_eq!(cents.format(&Amount::euros(dec("100"))), "100.00€");
        assert_eq!(cents.apply(dec("-0.001")), Decimal::ZERO);

        let preserve = AmountPrecision::Preserve;
        assert_eq!(preserve.format(&Amount::euros(dec("12.005"))), "12.005€");
    }

    #[test]
    fn test_truthiness() {
        assert!(PostingAmount::from(-100).is_truthy());
        assert!(!PostingAmount::from(0).is_truthy());
        assert!(!text("").is_truthy());
        assert!(text("0").is_truthy());
        assert!(PostingAmount::from(Amount::euros(Decimal::ZERO)).is_truthy());
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(text(" 10.5 ").as_plain_number(), Some(dec("10.5")));
        assert_eq!(text("10$").as_plain_number(), None);
        assert_eq!(PostingAmount::from(Amount::euros(dec("1"))).as_plain_number(), None);
    }

    #[test]
    fn test_deserialize_shapes() {
        let amounts: Vec<PostingAmount> =
            serde_yaml::from_str("[100, -4.29, '12.99$', {total: 0.0025, currency: BTC}]").unwrap();
        assert_eq!(
            amounts,
            vec![
                PostingAmount::Number(dec("100")),
                PostingAmount::Number(dec("-4.29")),
                text("12.99$"),
                PostingAmount::Amount(Amount::new(dec("0.0025"), "BTC")),
            ]
        );
    }

    #[test]
    fn test_serialize_numbers() {
        let yaml = serde_yaml::to_string(&vec![
            PostingAmount::Number(dec("-100.00")),
            PostingAmount::Number(dec("11.99")),
        ])
        .unwrap();
        assert_eq!(yaml, "- -100\n- 11.99\n");
    }
}
