//! Storage layer for prorata-cli
//!
//! Defines the budget source consumed by the accounting service and provides
//! two implementations: a JSON file store with atomic writes, and an
//! in-memory list.

pub mod budget;
pub mod file_io;
pub mod memory;

pub use budget::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use memory::InMemoryBudgetRepo;

use crate::config::paths::ProrataPaths;
use crate::error::ProrataResult;
use crate::models::Budget;

/// A source of monthly budgets
pub trait BudgetRepo {
    /// Return every known budget, in the source's own order
    fn get_all(&self) -> ProrataResult<Vec<Budget>>;
}

impl<T: BudgetRepo + ?Sized> BudgetRepo for &T {
    fn get_all(&self) -> ProrataResult<Vec<Budget>> {
        (**self).get_all()
    }
}

impl<T: BudgetRepo + ?Sized> BudgetRepo for Box<T> {
    fn get_all(&self) -> ProrataResult<Vec<Budget>> {
        (**self).get_all()
    }
}

/// Create the data directories and an empty budgets file if none exists
pub fn initialize_storage(paths: &ProrataPaths) -> ProrataResult<()> {
    paths.ensure_directories()?;

    if !paths.budgets_file().exists() {
        let repo = BudgetRepository::new(paths.budgets_file());
        repo.save()?;
    }

    Ok(())
}
