//! Export module for prorata-cli
//!
//! - CSV: spreadsheet-compatible, re-importable with `budget import`
//! - JSON: machine-readable export with schema version
//! - YAML: human-readable export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_budgets_csv;
pub use self::json::{export_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_yaml, import_from_yaml};
