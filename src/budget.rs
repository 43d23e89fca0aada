//! Department budget tracking for the dashboard's budget cards.

use serde::Serialize;

use crate::{Error, aggregation::total_spend, entry::FinancialEntry, timeframe::Timeframe};

/// Utilization at or above this percentage counts as nearing the limit.
const NEAR_LIMIT_PERCENT: i64 = 80;

/// A department's spend allocation for a budgeting period.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepartmentBudget {
    department: String,
    allocated: f64,
}

impl DepartmentBudget {
    /// Create a budget.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidBudget] if `allocated` is zero or negative.
    pub fn new(department: &str, allocated: f64) -> Result<Self, Error> {
        if allocated <= 0.0 {
            return Err(Error::InvalidBudget(department.to_string(), allocated));
        }

        Ok(Self {
            department: department.to_string(),
            allocated,
        })
    }

    /// The department this budget tracks.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// The allocated amount in GBP.
    pub fn allocated(&self) -> f64 {
        self.allocated
    }

    /// Measure spend against this budget.
    ///
    /// Spend is summed with the same case-insensitive department filter the
    /// dashboard totals use, optionally restricted to a timeframe.
    pub fn report(
        &self,
        entries: &[FinancialEntry],
        timeframe: Option<&Timeframe>,
    ) -> BudgetReport {
        let spent = total_spend(entries, timeframe, Some(&self.department));
        let utilization_percent = ((spent / self.allocated) * 100.0).round() as i64;

        BudgetReport {
            department: self.department.clone(),
            allocated: self.allocated,
            spent,
            remaining: self.allocated - spent,
            utilization_percent,
            status: BudgetStatus::from_percent(utilization_percent),
        }
    }
}

/// How a department's spend measures up against its allocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetReport {
    /// The department being tracked.
    pub department: String,
    /// The allocated amount.
    pub allocated: f64,
    /// Summed spend over the reporting period.
    pub spent: f64,
    /// Allocation minus spend; negative when over budget.
    pub remaining: f64,
    /// Spend as a rounded percentage of the allocation.
    pub utilization_percent: i64,
    /// Traffic-light classification of the utilization.
    pub status: BudgetStatus,
}

/// Traffic-light classification of budget utilization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    /// Utilization below 80%.
    UnderBudget,
    /// Utilization from 80% up to and including 100%.
    NearLimit,
    /// Utilization above 100%.
    OverBudget,
}

impl BudgetStatus {
    fn from_percent(percent: i64) -> Self {
        if percent > 100 {
            BudgetStatus::OverBudget
        } else if percent >= NEAR_LIMIT_PERCENT {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::UnderBudget
        }
    }
}
