//! Budget repository for JSON storage
//!
//! Keeps at most one budget per month, in the order they were first added.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ProrataError;
use crate::models::{Budget, YearMonth};

use super::file_io::{read_json, write_json_atomic};
use super::BudgetRepo;

/// Serializable budget file contents
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), ProrataError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| ProrataError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for budget in file_data.budgets {
            // Later entries for the same month win, keeping the first position
            match budgets
                .iter_mut()
                .find(|b| b.year_month() == budget.year_month())
            {
                Some(existing) => {
                    tracing::warn!(month = %budget.year_month(), "duplicate budget in file, keeping the last one");
                    *existing = budget;
                }
                None => budgets.push(budget),
            }
        }

        tracing::info!(count = budgets.len(), path = %self.path.display(), "loaded budgets");
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), ProrataError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| ProrataError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: budgets.clone(),
        };

        write_json_atomic(&self.path, &file_data)?;
        tracing::info!(count = budgets.len(), path = %self.path.display(), "saved budgets");
        Ok(())
    }

    /// Get the budget for a month
    pub fn get(&self, year_month: YearMonth) -> Result<Option<Budget>, ProrataError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| ProrataError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.iter().find(|b| b.year_month() == year_month).copied())
    }

    /// Insert a budget, replacing any budget for the same month in place
    ///
    /// Returns the replaced budget, if there was one.
    pub fn upsert(&self, budget: Budget) -> Result<Option<Budget>, ProrataError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| ProrataError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match budgets
            .iter_mut()
            .find(|b| b.year_month() == budget.year_month())
        {
            Some(existing) => Ok(Some(std::mem::replace(existing, budget))),
            None => {
                budgets.push(budget);
                Ok(None)
            }
        }
    }

    /// Delete the budget for a month
    pub fn delete(&self, year_month: YearMonth) -> Result<bool, ProrataError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| ProrataError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let initial_count = budgets.len();
        budgets.retain(|b| b.year_month() != year_month);
        Ok(budgets.len() != initial_count)
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, ProrataError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| ProrataError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }

    /// Get all budgets in stored order
    pub fn get_all(&self) -> Result<Vec<Budget>, ProrataError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| ProrataError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.clone())
    }
}

impl BudgetRepo for BudgetRepository {
    fn get_all(&self) -> Result<Vec<Budget>, ProrataError> {
        BudgetRepository::get_all(self)
    }
}
