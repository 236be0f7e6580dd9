//! In-memory budget source

use crate::error::ProrataResult;
use crate::models::Budget;

use super::BudgetRepo;

/// A fixed list of budgets, returned as given
#[derive(Debug, Clone, Default)]
pub struct InMemoryBudgetRepo {
    budgets: Vec<Budget>,
}

impl InMemoryBudgetRepo {
    pub fn new(budgets: Vec<Budget>) -> Self {
        Self { budgets }
    }

    pub fn push(&mut self, budget: Budget) {
        self.budgets.push(budget);
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}

impl FromIterator<Budget> for InMemoryBudgetRepo {
    fn from_iter<I: IntoIterator<Item = Budget>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl BudgetRepo for InMemoryBudgetRepo {
    fn get_all(&self) -> ProrataResult<Vec<Budget>> {
        Ok(self.budgets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_budgets_as_given() {
        let mut repo = InMemoryBudgetRepo::default();
        assert!(repo.is_empty());

        repo.push(Budget::new("200005", 3100.0).unwrap());
        repo.push(Budget::new("200004", 300.0).unwrap());
        repo.push(Budget::new("200004", 300.0).unwrap());

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].year_month().to_string(), "200005");
    }

    #[test]
    fn test_collect() {
        let repo: InMemoryBudgetRepo = ["200003", "200004"]
            .iter()
            .map(|m| Budget::new(m, 10.0).unwrap())
            .collect();
        assert_eq!(repo.get_all().unwrap().len(), 2);
    }
}
