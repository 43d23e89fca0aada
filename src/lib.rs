//! Spendlens is the analytical core of a procurement dashboard.
//!
//! It holds an immutable ledger of departmental spend entries keyed by
//! `Mon-YY` month tokens and answers the pure aggregation queries that the
//! dashboard, budget tracker, and reporting views consume: per-category
//! totals, sub-category breakdowns, monthly series, and budget utilization.
//!
//! The ledger is built once per process and never mutated; every query is a
//! pure function over a borrowed slice of entries.

#![warn(missing_docs)]

mod aggregation;
mod budget;
mod data;
mod entry;
mod month;
mod pagination;
mod report;
mod timeframe;

pub use aggregation::{
    MonthlySpend, SubCategoryTotal, all_categories, category_breakdown, category_spend_totals,
    monthly_category_spend, monthly_spend, total_spend,
};
pub use budget::{BudgetReport, BudgetStatus, DepartmentBudget};
pub use entry::{FinancialEntry, GENERAL_SUB_CATEGORY, SpendLedger};
pub use month::MonthToken;
pub use pagination::{PageItem, page_window};
pub use report::{breakdown_table, budget_line, category_table, format_gbp, monthly_table};
pub use timeframe::Timeframe;

/// The errors that may occur in the library.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A string used where a timeframe was expected was neither a 4-digit
    /// year nor a `Mon-YY` month token.
    #[error("\"{0}\" is not a 4-digit year or a Mon-YY month token")]
    InvalidTimeframe(String),

    /// A string used where a month token was expected did not match the
    /// `Mon-YY` grammar.
    ///
    /// Only strict parsing paths (CLI arguments) report this error; tokens
    /// already in the ledger degrade silently when sorted (see
    /// [MonthToken::sort_key]).
    #[error("\"{0}\" is not a valid Mon-YY month token")]
    InvalidMonthToken(String),

    /// A department budget was created with a zero or negative allocation.
    #[error("budget for {0} must have a positive allocation, got {1}")]
    InvalidBudget(String, f64),
}
