//! prorata-cli - prorate monthly budgets over arbitrary date ranges
//!
//! Each budget assigns a total amount to one calendar month, spread evenly over
//! that month's days. Given any date range, the accounting service sums the
//! share of every budget that falls inside it.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Budgets, months, and inclusive periods
//! - `storage`: The budget source trait plus JSON and in-memory sources
//! - `services`: Proration, budget management, CSV import
//! - `export`: CSV/JSON/YAML export
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use prorata_cli::models::Budget;
//! use prorata_cli::services::Accounting;
//! use prorata_cli::storage::InMemoryBudgetRepo;
//!
//! let repo = InMemoryBudgetRepo::new(vec![Budget::new("200004", 300.0).unwrap()]);
//! let accounting = Accounting::new(repo);
//!
//! let total = accounting
//!     .total_amount(
//!         NaiveDate::from_ymd_opt(2000, 3, 30).unwrap(),
//!         NaiveDate::from_ymd_opt(2000, 4, 2).unwrap(),
//!     )
//!     .unwrap();
//! assert_eq!(total, 20.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ProrataError, ProrataResult};
