//! CSV Export functionality
//!
//! The first two columns (`month,amount`) are the layout `budget import` reads.

use crate::error::{ProrataError, ProrataResult};
use crate::storage::BudgetRepo;
use std::io::Write;

/// Export all budgets to CSV, sorted by month
pub fn export_budgets_csv<R: BudgetRepo, W: Write>(repo: &R, writer: W) -> ProrataResult<()> {
    let mut budgets = repo.get_all()?;
    budgets.sort_by_key(|b| b.year_month());

    let mut csv_writer = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| ProrataError::Export(e.to_string());

    csv_writer
        .write_record(["month", "amount", "days", "daily_amount"])
        .map_err(export_err)?;

    for budget in &budgets {
        csv_writer
            .write_record([
                budget.year_month().to_string(),
                budget.amount().to_string(),
                budget.days().to_string(),
                budget.daily_amount().to_string(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ProrataError::Export(e.to_string()))?;
    Ok(())
}
