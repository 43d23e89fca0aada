//! Prints a spend report over the built-in procurement ledger.

use std::collections::HashMap;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use spendlens::{
    BudgetReport, DepartmentBudget, MonthlySpend, SpendLedger, SubCategoryTotal, Timeframe,
    all_categories, breakdown_table, budget_line, category_breakdown, category_spend_totals,
    category_table, format_gbp, monthly_spend, monthly_table, total_spend,
};

/// The spend report CLI for the procurement dashboard's ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Restrict to a 4-digit year or an exact Mon-YY month.
    #[arg(long)]
    timeframe: Option<Timeframe>,

    /// Restrict to one department (case-insensitive).
    #[arg(long)]
    department: Option<String>,

    /// Also print the sub-category breakdown for this category
    /// (case-sensitive).
    #[arg(long)]
    breakdown: Option<String>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// The full report in one serializable value, for `--json`.
#[derive(Serialize)]
struct SpendReport<'a> {
    timeframe: Option<&'a Timeframe>,
    department: Option<&'a str>,
    total: f64,
    categories: HashMap<String, f64>,
    monthly: Vec<MonthlySpend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<Vec<SubCategoryTotal>>,
    budgets: Vec<BudgetReport>,
}

fn main() {
    setup_logging();

    let args = Args::parse();
    let entries = SpendLedger::builtin().entries();
    tracing::debug!("loaded {} ledger entries", entries.len());

    let timeframe = args.timeframe.as_ref();
    let department = args.department.as_deref();

    let categories = category_spend_totals(entries, timeframe, department);
    let total = total_spend(entries, timeframe, department);
    let monthly = monthly_spend(entries);
    let breakdown = args.breakdown.as_deref().map(|category| {
        let rows = category_breakdown(entries, category, timeframe);
        if rows.is_empty() {
            tracing::warn!(
                "no spend recorded for category \"{}\"; known categories are {:?}",
                category,
                all_categories(entries)
            );
        }
        rows
    });
    let budgets: Vec<BudgetReport> = tracked_budgets()
        .iter()
        .map(|budget| budget.report(entries, timeframe))
        .collect();

    if args.json {
        let report = SpendReport {
            timeframe,
            department,
            total,
            categories,
            monthly,
            breakdown,
            budgets,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes as JSON")
        );
        return;
    }

    println!("Spend by category");
    print!("{}", category_table(&categories));
    println!("Total: {}\n", format_gbp(total));

    if let Some(rows) = &breakdown {
        println!("Breakdown: {}", args.breakdown.as_deref().unwrap_or_default());
        print!("{}", breakdown_table(rows));
        println!();
    }

    println!("Monthly spend");
    print!("{}", monthly_table(&monthly));
    println!();

    println!("Budgets");
    for report in &budgets {
        println!("  {}", budget_line(report));
    }
}

/// The departments the dashboard's budget tracker follows, with their
/// annual allocations in GBP.
fn tracked_budgets() -> Vec<DepartmentBudget> {
    [
        ("IT", 160_000.0),
        ("Facilities", 75_000.0),
        ("Marketing", 120_000.0),
        ("Operations", 80_000.0),
        ("HR", 50_000.0),
        ("Finance", 32_000.0),
    ]
    .into_iter()
    .map(|(department, allocated)| {
        DepartmentBudget::new(department, allocated).expect("allocations are positive")
    })
    .collect()
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty().with_filter(filter))
        .init();
}
