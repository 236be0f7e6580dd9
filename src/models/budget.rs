//! Monthly budget model
//!
//! A budget assigns a total amount to one calendar month. The amount is spread
//! evenly over the month's days.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::period::Period;
use super::year_month::YearMonth;
use crate::error::ProrataError;

/// A monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BudgetRecord", into = "BudgetRecord")]
pub struct Budget {
    year_month: YearMonth,
    amount: f64,
}

/// On-disk shape of a budget, validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BudgetRecord {
    year_month: YearMonth,
    amount: f64,
}

impl Budget {
    /// Create a budget from a month token such as "200004"
    pub fn new(year_month: &str, amount: f64) -> Result<Self, ProrataError> {
        Self::for_month(YearMonth::parse(year_month)?, amount)
    }

    /// Create a budget for an already-parsed month
    pub fn for_month(year_month: YearMonth, amount: f64) -> Result<Self, ProrataError> {
        let budget = Self { year_month, amount };
        budget.validate()?;
        Ok(budget)
    }

    pub fn year_month(&self) -> YearMonth {
        self.year_month
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The span from the first to the last day of the month
    pub fn create_period(&self) -> Period {
        Period::month(self.year_month)
    }

    /// Number of days in the budget's month
    pub fn days(&self) -> i64 {
        self.create_period().day_count()
    }

    /// The amount allotted to each day of the month
    pub fn daily_amount(&self) -> f64 {
        self.amount / self.days() as f64
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), ProrataError> {
        if !self.amount.is_finite() {
            return Err(ProrataError::Validation(format!(
                "Budget amount for {} must be a finite number",
                self.year_month
            )));
        }
        if self.amount < 0.0 {
            return Err(ProrataError::Validation(format!(
                "Budget amount for {} cannot be negative",
                self.year_month
            )));
        }
        Ok(())
    }
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = ProrataError;

    fn try_from(record: BudgetRecord) -> Result<Self, Self::Error> {
        Self::for_month(record.year_month, record.amount)
    }
}

impl From<Budget> for BudgetRecord {
    fn from(budget: Budget) -> Self {
        Self {
            year_month: budget.year_month,
            amount: budget.amount,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.year_month, self.amount)
    }
}
