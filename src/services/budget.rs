//! Budget service
//!
//! Validated create/replace/remove of monthly budgets on top of the JSON
//! repository. Every mutation is saved immediately.

use crate::error::{ProrataError, ProrataResult};
use crate::models::{Budget, YearMonth};
use crate::storage::BudgetRepository;

/// Outcome of setting a month's budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetOutcome {
    Created(Budget),
    Replaced { previous: Budget, current: Budget },
}

/// Service for budget management
pub struct BudgetService<'a> {
    repo: &'a BudgetRepository,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(repo: &'a BudgetRepository) -> Self {
        Self { repo }
    }

    /// Set the budget for a month, replacing any existing one
    pub fn set(&self, year_month: &str, amount: f64) -> ProrataResult<SetOutcome> {
        let budget = Budget::new(year_month, amount)?;

        let previous = self.repo.upsert(budget)?;
        self.repo.save()?;

        Ok(match previous {
            Some(previous) => {
                tracing::info!(month = %budget.year_month(), from = previous.amount(), to = amount, "replaced budget");
                SetOutcome::Replaced {
                    previous,
                    current: budget,
                }
            }
            None => {
                tracing::info!(month = %budget.year_month(), amount, "created budget");
                SetOutcome::Created(budget)
            }
        })
    }

    /// Remove the budget for a month
    pub fn remove(&self, year_month: &str) -> ProrataResult<Budget> {
        let year_month = YearMonth::parse(year_month)?;

        let budget = self
            .repo
            .get(year_month)?
            .ok_or_else(|| ProrataError::budget_not_found(year_month.to_string()))?;

        self.repo.delete(year_month)?;
        self.repo.save()?;

        tracing::info!(month = %year_month, "removed budget");
        Ok(budget)
    }

    /// List budgets sorted by month
    pub fn list(&self) -> ProrataResult<Vec<Budget>> {
        let mut budgets = self.repo.get_all()?;
        budgets.sort_by_key(|b| b.year_month());
        Ok(budgets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_set_creates_then_replaces() {
        let (_temp_dir, repo) = create_test_repo();
        let service = BudgetService::new(&repo);

        let created = service.set("200004", 30.0).unwrap();
        assert!(matches!(created, SetOutcome::Created(b) if b.amount() == 30.0));

        match service.set("2000-04", 300.0).unwrap() {
            SetOutcome::Replaced { previous, current } => {
                assert_eq!(previous.amount(), 30.0);
                assert_eq!(current.amount(), 300.0);
            }
            other => panic!("expected replacement, got {:?}", other),
        }
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_set_persists() {
        let (temp_dir, repo) = create_test_repo();
        BudgetService::new(&repo).set("200004", 30.0).unwrap();

        let reloaded = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 1);
    }

    #[test]
    fn test_set_rejects_invalid_input() {
        let (_temp_dir, repo) = create_test_repo();
        let service = BudgetService::new(&repo);

        assert!(service.set("200013", 30.0).unwrap_err().is_validation());
        assert!(service.set("200004", -30.0).unwrap_err().is_validation());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, repo) = create_test_repo();
        let service = BudgetService::new(&repo);

        service.set("200004", 30.0).unwrap();
        let removed = service.remove("200004").unwrap();
        assert_eq!(removed.amount(), 30.0);

        let err = service.remove("200004").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_sorted_by_month() {
        let (_temp_dir, repo) = create_test_repo();
        let service = BudgetService::new(&repo);

        service.set("200005", 3100.0).unwrap();
        service.set("200003", 31.0).unwrap();
        service.set("199912", 62.0).unwrap();

        let months: Vec<String> = service
            .list()
            .unwrap()
            .iter()
            .map(|b| b.year_month().to_string())
            .collect();
        assert_eq!(months, vec!["199912", "200003", "200005"]);
    }
}
