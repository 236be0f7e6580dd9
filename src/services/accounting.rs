//! Accounting service
//!
//! Prorates monthly budgets over an arbitrary date range. Each budget's amount
//! is spread evenly across its month, so a query period collects
//! `daily amount × overlapping days` from every budget it touches.

use chrono::NaiveDate;

use crate::error::ProrataResult;
use crate::models::{Budget, Period, YearMonth};
use crate::storage::BudgetRepo;

/// One budget's share of a query period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub year_month: YearMonth,
    pub overlap_days: i64,
    pub daily_amount: f64,
    pub amount: f64,
}

impl Contribution {
    fn of(budget: &Budget, query: &Period) -> Self {
        let overlap_days = query.overlapping_days(&budget.create_period());
        let daily_amount = budget.daily_amount();
        Self {
            year_month: budget.year_month(),
            overlap_days,
            daily_amount,
            amount: daily_amount * overlap_days as f64,
        }
    }
}

/// Sum of the contributed amounts, `0.0` when there are none
pub fn sum_contributions(contributions: &[Contribution]) -> f64 {
    contributions.iter().fold(0.0, |acc, c| acc + c.amount)
}

/// Service computing budget totals over date ranges
pub struct Accounting<R> {
    repo: R,
}

impl<R: BudgetRepo> Accounting<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Total budgeted amount falling between `start` and `end`, inclusive
    ///
    /// A range whose start is after its end covers no days and totals 0.
    /// Errors from the budget source are returned unchanged.
    pub fn total_amount(&self, start: NaiveDate, end: NaiveDate) -> ProrataResult<f64> {
        let total = sum_contributions(&self.contributions(start, end)?);

        tracing::debug!(%start, %end, total, "computed total");
        Ok(total)
    }

    /// Per-budget breakdown for the range, in the source's order
    pub fn contributions(&self, start: NaiveDate, end: NaiveDate) -> ProrataResult<Vec<Contribution>> {
        let query = Period::new(start, end);
        if !query.is_valid() {
            tracing::debug!(period = %query, "inverted query period, nothing overlaps");
        }

        let budgets = self.repo.get_all()?;
        Ok(budgets
            .iter()
            .map(|budget| {
                let contribution = Contribution::of(budget, &query);
                tracing::debug!(
                    month = %contribution.year_month,
                    days = contribution.overlap_days,
                    daily = contribution.daily_amount,
                    amount = contribution.amount,
                    "budget contribution"
                );
                contribution
            })
            .collect())
    }
}
