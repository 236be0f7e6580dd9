//! Service layer for prorata-cli
//!
//! The service layer provides business logic on top of the storage layer:
//! prorated totals, validated budget edits, and CSV import.

pub mod accounting;
pub mod budget;
pub mod import;

pub use accounting::{sum_contributions, Accounting, Contribution};
pub use budget::{BudgetService, SetOutcome};
pub use import::{ImportResult, ImportService, RowError};
