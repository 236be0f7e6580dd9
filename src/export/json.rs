//! JSON Export functionality
//!
//! Exports all budgets to JSON with schema versioning.

use crate::error::{ProrataError, ProrataResult};
use crate::models::{Budget, YearMonth};
use crate::storage::BudgetRepo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Budget export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All budgets, sorted by month
    pub budgets: Vec<Budget>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub budget_count: usize,

    /// Sum of all monthly amounts
    pub total_amount: f64,

    pub earliest_month: Option<YearMonth>,
    pub latest_month: Option<YearMonth>,
}

impl BudgetExport {
    /// Build an export from any budget source
    pub fn from_repo<R: BudgetRepo>(repo: &R) -> ProrataResult<Self> {
        let mut budgets = repo.get_all()?;
        budgets.sort_by_key(|b| b.year_month());

        let metadata = ExportMetadata {
            budget_count: budgets.len(),
            total_amount: budgets.iter().fold(0.0, |acc, b| acc + b.amount()),
            earliest_month: budgets.first().map(|b| b.year_month()),
            latest_month: budgets.last().map(|b| b.year_month()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budgets,
            metadata,
        })
    }
}

/// Export all budgets as JSON
pub fn export_json<R: BudgetRepo, W: Write>(
    repo: &R,
    writer: &mut W,
    pretty: bool,
) -> ProrataResult<()> {
    let export = BudgetExport::from_repo(repo)?;

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| ProrataError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ProrataError::Export(e.to_string()))?;
    Ok(())
}
