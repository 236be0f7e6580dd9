//! CLI command for data export

use crate::error::{ProrataError, ProrataResult};
use crate::export;
use crate::storage::BudgetRepo;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (re-importable)
    Csv,
    /// JSON format
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Write all budgets to `output` in the chosen format
pub fn handle_export_command<R: BudgetRepo>(
    repo: &R,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> ProrataResult<()> {
    let file = File::create(output).map_err(|e| {
        ProrataError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export::export_budgets_csv(repo, &mut writer)?,
        ExportFormat::Json => export::export_json(repo, &mut writer, pretty)?,
        ExportFormat::Yaml => export::export_yaml(repo, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ProrataError::Export(e.to_string()))?;

    println!("Exported budgets to {}", output.display());
    Ok(())
}
