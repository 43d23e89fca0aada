//! Plain-text rendering of aggregates for the report CLI.

use std::{collections::HashMap, fmt::Write, sync::OnceLock};

use numfmt::{Formatter, Precision};

use crate::{
    aggregation::{MonthlySpend, SubCategoryTotal},
    budget::{BudgetReport, BudgetStatus},
};

const LABEL_WIDTH: usize = 22;
const AMOUNT_WIDTH: usize = 14;

/// Formats an amount as GBP with thousands separators, e.g. `£1,234.50`.
pub fn format_gbp(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("£")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-£")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0" by numfmt, so spell it out ourselves.
        return "£0.00".to_owned();
    };

    // numfmt drops a trailing zero ("12.30" renders as "12.3"), so restore it.
    if formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }

    formatted
}

/// Renders per-category totals as an aligned two-column table, largest
/// spender first. Equal amounts order alphabetically.
pub fn category_table(totals: &HashMap<String, f64>) -> String {
    let mut rows: Vec<(&str, f64)> = totals
        .iter()
        .map(|(category, &amount)| (category.as_str(), amount))
        .collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut table = String::new();
    for (category, amount) in rows {
        writeln_row(&mut table, category, amount);
    }

    table
}

/// Renders a sub-category breakdown as an aligned two-column table, in the
/// order the breakdown query produced.
pub fn breakdown_table(rows: &[SubCategoryTotal]) -> String {
    let mut table = String::new();
    for row in rows {
        writeln_row(&mut table, &row.sub_category, row.amount);
    }

    table
}

/// Renders a monthly series as an aligned two-column table, in the order
/// the monthly query produced.
pub fn monthly_table(rows: &[MonthlySpend]) -> String {
    let mut table = String::new();
    for row in rows {
        writeln_row(&mut table, row.month.label(), row.amount);
    }

    table
}

/// Renders a budget report as a single status line.
pub fn budget_line(report: &BudgetReport) -> String {
    let status = match report.status {
        BudgetStatus::UnderBudget => "under budget",
        BudgetStatus::NearLimit => "near limit",
        BudgetStatus::OverBudget => "over budget",
    };

    format!(
        "{}: {} of {} ({}%, {})",
        report.department,
        format_gbp(report.spent),
        format_gbp(report.allocated),
        report.utilization_percent,
        status,
    )
}

fn writeln_row(table: &mut String, label: &str, amount: f64) {
    let amount = format_gbp(amount);
    writeln!(table, "{label:<LABEL_WIDTH$}{amount:>AMOUNT_WIDTH$}")
        .expect("writing to a String cannot fail");
}
