//! Half shortcut resolution
//!
//! `{ half: account }` records "half of this was paid for someone else": it
//! becomes a posting to `account` of minus half the transaction's single
//! amount.

use std::borrow::Cow;

use rust_decimal::Decimal;

use crate::error::{KontuakError, KontuakResult};
use crate::models::{
    parse_amount_in, Amount, AmountPrecision, Posting, PostingEntry, Transaction, DEFAULT_CURRENCY,
};

/// Resolve the half shortcut, keeping computed amounts at full precision
pub fn resolve_half(txn: &Transaction) -> KontuakResult<Cow<'_, Transaction>> {
    resolve_half_with(txn, AmountPrecision::Preserve, DEFAULT_CURRENCY)
}

/// Resolve the half shortcut, rounding the computed amount with `precision`
///
/// Bare numbers are in `home_currency`. Returns the transaction borrowed when
/// it has no shortcut.
pub fn resolve_half_with<'a>(
    txn: &'a Transaction,
    precision: AmountPrecision,
    home_currency: &str,
) -> KontuakResult<Cow<'a, Transaction>> {
    let mut halves = txn
        .postings
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| match entry {
            PostingEntry::Half(half) => Some((idx, half)),
            PostingEntry::Posting(_) => None,
        });

    let Some((half_idx, half)) = halves.next() else {
        return Ok(Cow::Borrowed(txn));
    };

    if halves.next().is_some() {
        return Err(KontuakError::DuplicateHalfShortcut {
            date: txn.date.clone(),
            item: txn.item.clone(),
        });
    }

    let sources: Vec<_> = txn
        .postings()
        .filter_map(|posting| posting.amount.as_ref())
        .filter(|amount| amount.is_truthy())
        .collect();

    let [source] = sources.as_slice() else {
        return Err(KontuakError::HalfShortcutArity {
            date: txn.date.clone(),
            item: txn.item.clone(),
            found: sources.len(),
        });
    };

    let source = parse_amount_in(source, home_currency)?;
    let total = precision.apply(-(source.total / Decimal::TWO));

    log::debug!(
        "{} {}: half of {} to {}",
        txn.date,
        txn.item,
        source,
        half.half
    );

    let mut resolved = txn.clone();
    resolved.postings[half_idx] =
        Posting::with_amount(half.half.clone(), Amount::new(total, source.currency)).into();

    Ok(Cow::Owned(resolved))
}
