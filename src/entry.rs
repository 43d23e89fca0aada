//! Core ledger types: spend entries and the immutable ledger that owns them.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{data, month::MonthToken};

/// The sub-category label used when a source row carries none.
pub const GENERAL_SUB_CATEGORY: &str = "General";

/// A single spend record: one amount booked to a department and cost label
/// in one month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialEntry {
    /// The month the spend was booked in, as a `Mon-YY` token.
    pub month: MonthToken,
    /// Top-level department / cost-centre name.
    pub category: String,
    /// Finer-grained cost label within the department.
    pub sub_category: String,
    /// Signed amount in whole GBP units.
    pub amount: f64,
}

impl FinancialEntry {
    /// Create an entry, collapsing an empty sub-category to
    /// [GENERAL_SUB_CATEGORY].
    pub fn new(month: &str, category: &str, sub_category: &str, amount: f64) -> Self {
        let sub_category = if sub_category.is_empty() {
            GENERAL_SUB_CATEGORY
        } else {
            sub_category
        };

        Self {
            month: MonthToken::new(month),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            amount,
        }
    }
}

/// An immutable collection of spend entries.
///
/// The built-in ledger is constructed once per process from the static
/// source tables and lives for the lifetime of the process; it is never
/// written back or invalidated. Queries borrow the entry slice, so a caller
/// with its own data can build a ledger with [SpendLedger::from_entries] and
/// run the same queries over it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendLedger {
    entries: Vec<FinancialEntry>,
}

impl SpendLedger {
    /// Build a ledger from pre-constructed entries.
    pub fn from_entries(entries: Vec<FinancialEntry>) -> Self {
        Self { entries }
    }

    /// The process-wide built-in ledger: the historical source table
    /// followed by the current-year table, concatenated in that order.
    ///
    /// Duplicate `(category, sub_category)` pairs across the two tables are
    /// intentional; queries accumulate them by summation.
    pub fn builtin() -> &'static SpendLedger {
        static LEDGER: OnceLock<SpendLedger> = OnceLock::new();

        LEDGER.get_or_init(|| {
            let entries = data::HISTORICAL
                .iter()
                .chain(data::CURRENT_YEAR)
                .map(|&(month, category, sub_category, amount)| {
                    FinancialEntry::new(month, category, sub_category, amount)
                })
                .collect();

            SpendLedger::from_entries(entries)
        })
    }

    /// The entries in source order.
    pub fn entries(&self) -> &[FinancialEntry] {
        &self.entries
    }
}
