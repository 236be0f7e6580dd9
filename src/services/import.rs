//! CSV Import service
//!
//! Imports monthly budgets from CSV files with a `month,amount` layout. Rows
//! that fail to parse are reported and skipped; valid rows replace any budget
//! already set for the same month.

use std::io::Read;

use csv::{Reader, StringRecord};

use crate::error::{ProrataError, ProrataResult};
use crate::models::Budget;
use crate::storage::BudgetRepository;

/// A row that could not be imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the source file
    pub line: u64,
    pub message: String,
}

/// Summary of an import run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportResult {
    pub created: usize,
    pub replaced: usize,
    pub errors: Vec<RowError>,
}

impl ImportResult {
    pub fn imported(&self) -> usize {
        self.created + self.replaced
    }
}

/// Service for importing budgets
pub struct ImportService<'a> {
    repo: &'a BudgetRepository,
}

impl<'a> ImportService<'a> {
    pub fn new(repo: &'a BudgetRepository) -> Self {
        Self { repo }
    }

    /// Parse budgets from a CSV reader without touching storage
    pub fn parse_csv_from_reader<R: Read>(
        &self,
        reader: &mut Reader<R>,
    ) -> ProrataResult<Vec<Result<Budget, RowError>>> {
        let mut results = Vec::new();

        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(ProrataError::Import(e.to_string())),
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or_default();
                    results.push(Err(RowError {
                        line,
                        message: e.to_string(),
                    }));
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            results.push(parse_record(&record).map_err(|message| RowError { line, message }));
        }

        Ok(results)
    }

    /// Import budgets from CSV text and save the repository
    pub fn import_csv<R: Read>(&self, source: R) -> ProrataResult<ImportResult> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut result = ImportResult::default();
        for parsed in self.parse_csv_from_reader(&mut reader)? {
            match parsed {
                Ok(budget) => match self.repo.upsert(budget)? {
                    Some(_) => result.replaced += 1,
                    None => result.created += 1,
                },
                Err(err) => {
                    tracing::warn!(line = err.line, error = %err.message, "skipping budget row");
                    result.errors.push(err);
                }
            }
        }

        if result.imported() > 0 {
            self.repo.save()?;
        }

        tracing::info!(
            created = result.created,
            replaced = result.replaced,
            skipped = result.errors.len(),
            "imported budgets"
        );
        Ok(result)
    }
}

fn parse_record(record: &StringRecord) -> Result<Budget, String> {
    if record.len() > 2 {
        return Err(format!("expected 2 fields, found {}", record.len()));
    }

    let month = record
        .get(0)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "missing month".to_string())?;
    let amount_str = record
        .get(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "missing amount".to_string())?;

    let amount: f64 = amount_str
        .parse()
        .map_err(|_| format!("invalid amount '{}'", amount_str))?;

    Budget::new(month, amount).map_err(|e| e.to_string())
}
