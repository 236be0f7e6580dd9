//! Budget CLI commands
//!
//! Implements CLI commands for setting, removing, listing, and importing
//! monthly budgets.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_list;
use crate::error::{ProrataError, ProrataResult};
use crate::services::{BudgetService, ImportService, SetOutcome};
use crate::storage::BudgetRepository;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a month (creates or replaces)
    Set {
        /// Month as YYYYMM (e.g., "200004") or YYYY-MM
        month: String,
        /// Total amount for the month
        amount: f64,
    },

    /// Remove the budget for a month
    #[command(alias = "rm")]
    Remove {
        /// Month as YYYYMM or YYYY-MM
        month: String,
    },

    /// List all budgets
    #[command(alias = "ls")]
    List,

    /// Import budgets from a CSV file with a "month,amount" header
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    repo: &BudgetRepository,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ProrataResult<()> {
    match cmd {
        BudgetCommands::Set { month, amount } => {
            match BudgetService::new(repo).set(&month, amount)? {
                SetOutcome::Created(budget) => {
                    println!(
                        "Set budget for {}: {}",
                        budget.year_month().label(),
                        settings.format_amount(budget.amount())
                    );
                }
                SetOutcome::Replaced { previous, current } => {
                    println!(
                        "Updated budget for {}: {} -> {}",
                        current.year_month().label(),
                        settings.format_amount(previous.amount()),
                        settings.format_amount(current.amount())
                    );
                }
            }
        }
        BudgetCommands::Remove { month } => {
            let removed = BudgetService::new(repo).remove(&month)?;
            println!("Removed budget for {}", removed.year_month().label());
        }
        BudgetCommands::List => {
            let budgets = BudgetService::new(repo).list()?;
            print!("{}", format_budget_list(&budgets, settings));
            if budgets.is_empty() {
                println!();
            }
        }
        BudgetCommands::Import { file } => {
            let source = File::open(&file).map_err(|e| {
                ProrataError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;

            let result = ImportService::new(repo).import_csv(BufReader::new(source))?;

            println!(
                "Imported {} budget(s): {} new, {} updated",
                result.imported(),
                result.created,
                result.replaced
            );
            if !result.errors.is_empty() {
                println!("Skipped {} row(s):", result.errors.len());
                for err in &result.errors {
                    println!("  line {}: {}", err.line, err.message);
                }
            }
        }
    }

    Ok(())
}
