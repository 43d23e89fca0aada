//! Pure aggregation queries over ledger entries.
//!
//! Every function here is referentially transparent over the borrowed entry
//! slice: no I/O, no shared state, no failure paths. The dashboard, budget
//! tracker, and report views are all built on these six queries.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{
    entry::{FinancialEntry, GENERAL_SUB_CATEGORY},
    month::MonthToken,
    timeframe::Timeframe,
};

/// One sub-category's share of a department's spend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubCategoryTotal {
    /// The cost label within the department.
    pub sub_category: String,
    /// Summed spend for the label.
    pub amount: f64,
}

/// One month's summed spend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlySpend {
    /// The month token the spend was booked under.
    pub month: MonthToken,
    /// Summed spend for the month.
    pub amount: f64,
}

/// Sums spend per category.
///
/// The timeframe filter is applied first, then the department filter. The
/// department filter is case-insensitive. Categories with no matching
/// entries are absent from the result, not zero-valued.
pub fn category_spend_totals(
    entries: &[FinancialEntry],
    timeframe: Option<&Timeframe>,
    department: Option<&str>,
) -> HashMap<String, f64> {
    let mut totals = HashMap::new();

    for entry in filtered(entries, timeframe, department) {
        *totals.entry(entry.category.clone()).or_insert(0.0) += entry.amount;
    }

    totals
}

/// Sums one category's spend per sub-category, largest first.
///
/// Category matching is exact (case-sensitive), unlike the department
/// filter on [category_spend_totals]. An empty sub-category counts under
/// `"General"`. Tie order between equal amounts is not contractually
/// stable.
pub fn category_breakdown(
    entries: &[FinancialEntry],
    category: &str,
    timeframe: Option<&Timeframe>,
) -> Vec<SubCategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for entry in filtered(entries, timeframe, None) {
        if entry.category != category {
            continue;
        }

        let label = if entry.sub_category.is_empty() {
            GENERAL_SUB_CATEGORY
        } else {
            entry.sub_category.as_str()
        };
        *totals.entry(label).or_insert(0.0) += entry.amount;
    }

    let mut breakdown: Vec<SubCategoryTotal> = totals
        .into_iter()
        .map(|(sub_category, amount)| SubCategoryTotal {
            sub_category: sub_category.to_owned(),
            amount,
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    breakdown
}

/// Sums one category's spend per month, in chronological order.
///
/// Grouping is by raw month token; ordering is by the token's parsed date,
/// so `"Dec-24"` sorts before `"Jan-25"`.
pub fn monthly_category_spend(entries: &[FinancialEntry], category: &str) -> Vec<MonthlySpend> {
    let matching: Vec<&FinancialEntry> = entries
        .iter()
        .filter(|entry| entry.category == category)
        .collect();

    sum_by_month(&matching)
}

/// The scalar sum of spend across the filtered entries.
///
/// Applies the same filters as [category_spend_totals]. Returns `0.0` for
/// an empty set.
pub fn total_spend(
    entries: &[FinancialEntry],
    timeframe: Option<&Timeframe>,
    department: Option<&str>,
) -> f64 {
    filtered(entries, timeframe, department)
        .map(|entry| entry.amount)
        .sum()
}

/// Sums all spend per month, in chronological order.
pub fn monthly_spend(entries: &[FinancialEntry]) -> Vec<MonthlySpend> {
    let all: Vec<&FinancialEntry> = entries.iter().collect();

    sum_by_month(&all)
}

/// Every distinct category name across all entries, alphabetically sorted.
pub fn all_categories(entries: &[FinancialEntry]) -> Vec<String> {
    let mut seen = HashSet::new();

    for entry in entries {
        seen.insert(entry.category.as_str());
    }

    let mut categories: Vec<String> = seen.into_iter().map(str::to_owned).collect();
    categories.sort();
    categories
}

fn filtered<'a>(
    entries: &'a [FinancialEntry],
    timeframe: Option<&'a Timeframe>,
    department: Option<&'a str>,
) -> impl Iterator<Item = &'a FinancialEntry> {
    entries.iter().filter(move |entry| {
        let in_timeframe = timeframe
            .map(|timeframe| timeframe.matches(&entry.month))
            .unwrap_or(true);
        let in_department = department
            .map(|department| entry.category.eq_ignore_ascii_case(department))
            .unwrap_or(true);

        in_timeframe && in_department
    })
}

fn sum_by_month(entries: &[&FinancialEntry]) -> Vec<MonthlySpend> {
    let mut totals: HashMap<MonthToken, f64> = HashMap::new();

    for entry in entries {
        *totals.entry(entry.month.clone()).or_insert(0.0) += entry.amount;
    }

    let mut months: Vec<MonthlySpend> = totals
        .into_iter()
        .map(|(month, amount)| MonthlySpend { month, amount })
        .collect();

    months.sort_by_key(|monthly| monthly.month.sort_key());

    months
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{
        aggregation::{
            all_categories, category_breakdown, category_spend_totals, monthly_category_spend,
            monthly_spend, total_spend,
        },
        entry::FinancialEntry,
        month::MonthToken,
        timeframe::Timeframe,
    };

    fn sample_entries() -> Vec<FinancialEntry> {
        vec![
            FinancialEntry::new("Jan-25", "Ops", "Travel", 100.0),
            FinancialEntry::new("Jan-25", "Ops", "Food", 50.0),
            FinancialEntry::new("Feb-25", "Ops", "Travel", 30.0),
        ]
    }

    #[test]
    fn totals_sum_per_category_within_a_year() {
        let entries = sample_entries();
        let want = HashMap::from([("Ops".to_string(), 180.0)]);

        let got = category_spend_totals(&entries, Some(&Timeframe::Year(2025)), None);

        assert_eq!(want, got);
    }

    #[test]
    fn totals_omit_categories_with_no_matching_entries() {
        let entries = sample_entries();
        let timeframe = Timeframe::Month(MonthToken::new("Mar-25"));

        let got = category_spend_totals(&entries, Some(&timeframe), None);

        assert!(got.is_empty());
    }

    #[test]
    fn department_filter_ignores_case() {
        let entries = sample_entries();

        let got = category_spend_totals(&entries, None, Some("ops"));

        assert_eq!(got, HashMap::from([("Ops".to_string(), 180.0)]));
    }

    #[test]
    fn breakdown_sums_and_sorts_descending() {
        let entries = sample_entries();

        let got = category_breakdown(&entries, "Ops", None);

        assert_eq!(got.len(), 2);
        assert_eq!(got[0].sub_category, "Travel");
        assert_eq!(got[0].amount, 130.0);
        assert_eq!(got[1].sub_category, "Food");
        assert_eq!(got[1].amount, 50.0);
    }

    #[test]
    fn breakdown_category_match_is_case_sensitive() {
        let entries = sample_entries();

        let got = category_breakdown(&entries, "ops", None);

        assert!(got.is_empty());
    }

    #[test]
    fn breakdown_groups_empty_sub_category_as_general() {
        let entries = vec![
            FinancialEntry::new("Jan-25", "Ops", "", 40.0),
            FinancialEntry::new("Feb-25", "Ops", "", 25.0),
        ];

        let got = category_breakdown(&entries, "Ops", None);

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].sub_category, "General");
        assert_eq!(got[0].amount, 65.0);
    }

    #[test]
    fn breakdown_amounts_sum_to_category_total() {
        let entries = sample_entries();
        let timeframe = Timeframe::Year(2025);

        let totals = category_spend_totals(&entries, Some(&timeframe), None);
        let breakdown = category_breakdown(&entries, "Ops", Some(&timeframe));
        let breakdown_sum: f64 = breakdown.iter().map(|row| row.amount).sum();

        assert_eq!(breakdown_sum, totals["Ops"]);
    }

    #[test]
    fn monthly_category_spend_sums_per_month() {
        let entries = sample_entries();

        let got = monthly_category_spend(&entries, "Ops");

        assert_eq!(got.len(), 2);
        assert_eq!(got[0].month.label(), "Jan-25");
        assert_eq!(got[0].amount, 150.0);
        assert_eq!(got[1].month.label(), "Feb-25");
        assert_eq!(got[1].amount, 30.0);
    }

    #[test]
    fn monthly_series_sorts_chronologically_not_lexically() {
        let entries = vec![
            FinancialEntry::new("Jan-25", "Ops", "Travel", 10.0),
            FinancialEntry::new("Dec-24", "Ops", "Travel", 20.0),
            FinancialEntry::new("Aug-24", "Ops", "Travel", 30.0),
        ];

        let got = monthly_spend(&entries);

        let months: Vec<&str> = got.iter().map(|m| m.month.label()).collect();
        assert_eq!(months, ["Aug-24", "Dec-24", "Jan-25"]);
    }

    #[test]
    fn total_spend_matches_sum_of_category_totals() {
        let entries = sample_entries();

        for timeframe in [
            None,
            Some(Timeframe::Year(2025)),
            Some(Timeframe::Month(MonthToken::new("Jan-25"))),
        ] {
            let total = total_spend(&entries, timeframe.as_ref(), None);
            let by_category: f64 = category_spend_totals(&entries, timeframe.as_ref(), None)
                .values()
                .sum();

            assert_eq!(total, by_category);
        }
    }

    #[test]
    fn total_spend_is_zero_for_empty_set() {
        let entries = sample_entries();
        let timeframe = Timeframe::Month(MonthToken::new("Mar-25"));

        let got = total_spend(&entries, Some(&timeframe), None);

        assert_eq!(got, 0.0);
    }

    #[test]
    fn all_categories_is_sorted_and_deduplicated() {
        let entries = vec![
            FinancialEntry::new("Jan-25", "Marketing", "Advertising", 10.0),
            FinancialEntry::new("Jan-25", "Facilities", "Utilities", 20.0),
            FinancialEntry::new("Feb-25", "Marketing", "Events", 30.0),
            FinancialEntry::new("Feb-25", "IT", "Hardware", 40.0),
        ];

        let got = all_categories(&entries);

        assert_eq!(got, ["Facilities", "IT", "Marketing"]);
    }

    #[test]
    fn queries_are_idempotent() {
        let entries = sample_entries();
        let timeframe = Timeframe::Year(2025);

        assert_eq!(
            category_spend_totals(&entries, Some(&timeframe), Some("Ops")),
            category_spend_totals(&entries, Some(&timeframe), Some("Ops")),
        );
        assert_eq!(
            category_breakdown(&entries, "Ops", Some(&timeframe)),
            category_breakdown(&entries, "Ops", Some(&timeframe)),
        );
        assert_eq!(
            monthly_category_spend(&entries, "Ops"),
            monthly_category_spend(&entries, "Ops"),
        );
    }
}
