//! The pairing passes and residual collection
//!
//! Each pass walks the bank list in input order and, for every unclaimed bank
//! transaction, takes the first unclaimed book transaction that satisfies the
//! pass predicate. This is greedy first-match pairing, not an optimal
//! assignment, and the output depends on input order.

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::MatchConfig;
use crate::reconciliation::ClaimSet;
use crate::types::*;

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Note attached to bank transactions with no book counterpart
pub const BANK_ONLY_NOTE: &str = "No counterpart found in book records";

/// Note attached to book transactions with no bank counterpart
pub const BOOK_ONLY_NOTE: &str =
    "No counterpart found in bank statement (possibly over-recorded or an uncleared cheque)";

/// Parse a transaction date into a point in time
///
/// Accepts `YYYY-MM-DD` (midnight), RFC 3339 (converted to UTC) and
/// `YYYY-MM-DDTHH:MM:SS`. Returns `None` for anything else.
pub fn parse_instant(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();

    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(date) {
        return Some(instant.naive_utc());
    }
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Absolute difference between two dates in days, rounded up
///
/// `None` if either date cannot be parsed.
pub fn day_difference(a: &str, b: &str) -> Option<i64> {
    let a = parse_instant(a)?;
    let b = parse_instant(b)?;
    let millis = (a - b).num_milliseconds().abs();
    Some((millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY)
}

/// `|book - bank| / |bank|`, or `None` when the bank amount is zero
pub fn tolerance_ratio(bank: &BigDecimal, book: &BigDecimal) -> Option<BigDecimal> {
    if *bank == BigDecimal::from(0) {
        return None;
    }
    Some((book - bank).abs() / bank.abs())
}

impl PairingPass {
    /// Whether `book` is an acceptable counterpart for `bank` in this pass
    pub fn accepts(&self, bank: &Transaction, book: &Transaction, config: &MatchConfig) -> bool {
        match self {
            PairingPass::Exact => book.amount == bank.amount && book.date == bank.date,
            PairingPass::DateWindow => {
                book.amount == bank.amount
                    && day_difference(&bank.date, &book.date)
                        .is_some_and(|days| days <= config.date_window_days)
            }
            PairingPass::AmountTolerance => {
                book.date == bank.date
                    && tolerance_ratio(&bank.amount, &book.amount)
                        .is_some_and(|ratio| ratio < config.amount_tolerance)
            }
        }
    }

    /// Rationale text for a pair produced by this pass
    pub fn note(&self, bank: &Transaction, book: &Transaction) -> String {
        match self {
            PairingPass::Exact => "Exact match (date and amount)".to_string(),
            PairingPass::DateWindow => format!(
                "Amounts match but dates differ ({} vs {})",
                bank.date, book.date
            ),
            PairingPass::AmountTolerance => format!(
                "Dates match but amounts differ slightly ({} vs {})",
                bank.amount, book.amount
            ),
        }
    }
}

/// Run one pairing pass over the unclaimed transactions
///
/// Claims are applied as soon as a pair is found, so a later bank transaction
/// in the same pass can never take the same book transaction.
pub fn run_pairing_pass(
    pass: PairingPass,
    bank: &[Transaction],
    book: &[Transaction],
    claims: &mut ClaimSet,
    config: &MatchConfig,
) -> Vec<MatchResult> {
    let mut results = Vec::new();

    for bank_tx in bank {
        if claims.is_bank_claimed(&bank_tx.id) {
            continue;
        }

        let candidate = book.iter().find(|book_tx| {
            !claims.is_book_claimed(&book_tx.id) && pass.accepts(bank_tx, book_tx, config)
        });

        if let Some(book_tx) = candidate {
            claims.claim_pair(&bank_tx.id, &book_tx.id);
            results.push(MatchResult::paired(
                pass,
                bank_tx.clone(),
                book_tx.clone(),
                pass.note(bank_tx, book_tx),
            ));
        }
    }

    results
}

/// Emit unmatched results for everything still unclaimed: all bank
/// transactions first, then all book transactions, each in input order
pub fn collect_residuals(
    bank: &[Transaction],
    book: &[Transaction],
    claims: &ClaimSet,
) -> Vec<MatchResult> {
    let bank_only = bank
        .iter()
        .filter(|tx| !claims.is_bank_claimed(&tx.id))
        .map(|tx| MatchResult::bank_only(tx.clone(), BANK_ONLY_NOTE.to_string()));

    let book_only = book
        .iter()
        .filter(|tx| !claims.is_book_claimed(&tx.id))
        .map(|tx| MatchResult::book_only(tx.clone(), BOOK_ONLY_NOTE.to_string()));

    bank_only.chain(book_only).collect()
}
