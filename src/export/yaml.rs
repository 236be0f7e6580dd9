//! YAML Export functionality
//!
//! Same document as the JSON export, for human reading.

use crate::error::{ProrataError, ProrataResult};
use crate::export::json::BudgetExport;
use crate::storage::BudgetRepo;
use std::io::Write;

/// Export all budgets as YAML
pub fn export_yaml<R: BudgetRepo, W: Write>(repo: &R, writer: &mut W) -> ProrataResult<()> {
    let export = BudgetExport::from_repo(repo)?;
    let export_err = |e: std::io::Error| ProrataError::Export(e.to_string());

    writeln!(writer, "# prorata-cli budget export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ProrataError::Export(e.to_string()))?;

    Ok(())
}

/// Read an export back from YAML
pub fn import_from_yaml(yaml_str: &str) -> ProrataResult<BudgetExport> {
    serde_yaml::from_str(yaml_str).map_err(|e| ProrataError::Import(e.to_string()))
}
