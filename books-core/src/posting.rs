//! Journal validation and conversion into ledger entries
//!
//! A journal posts only when its debit and credit totals agree within the
//! rounding tolerance and the balanced total is strictly positive. On
//! success each submitted line becomes exactly one dated, referenced
//! [`LedgerEntry`]; on failure nothing is produced.

use crate::error::{Error, Result};
use crate::types::{JournalLine, LedgerEntry};
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Debit and credit totals may differ by strictly less than this.
fn balance_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01 currency units
}

/// Sum the debit and credit sides of a set of lines.
pub fn journal_totals(lines: &[JournalLine]) -> (Decimal, Decimal) {
    lines.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(debit, credit), line| (debit + line.debit, credit + line.credit),
    )
}

/// Validate the double-entry balance rule over a journal.
///
/// Rejects journals whose totals differ by the tolerance or more, and
/// all-zero journals (a postable entry must move a positive amount).
pub fn validate(lines: &[JournalLine]) -> Result<()> {
    let (debit, credit) = journal_totals(lines);

    if (debit - credit).abs() >= balance_tolerance() || debit <= Decimal::ZERO {
        return Err(Error::Unbalanced { debit, credit });
    }

    Ok(())
}

/// Convert validated lines 1:1 into ledger entries.
///
/// Each entry is stamped with today's date, a fresh time-ordered ID, and the
/// supplied reference.
pub fn into_entries(lines: Vec<JournalLine>, reference: &str) -> Vec<LedgerEntry> {
    let date = Utc::now().date_naive();

    lines
        .into_iter()
        .map(|line| LedgerEntry {
            id: Uuid::now_v7(),
            date,
            reference: reference.to_string(),
            account: line.account,
            description: line.description,
            debit: line.debit,
            credit: line.credit,
        })
        .collect()
}
