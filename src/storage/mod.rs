//! Storage layer for Pocketbook
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use records::{RecordRepository, StoredRecord};

use crate::config::paths::PocketPaths;
use crate::error::PocketError;
use crate::models::{Budget, Expense, Income, RecordKind};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PocketPaths,
    pub expenses: RecordRepository<Expense>,
    pub incomes: RecordRepository<Income>,
    pub budgets: RecordRepository<Budget>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PocketPaths) -> Result<Self, PocketError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: RecordRepository::new(paths.expenses_file()),
            incomes: RecordRepository::new(paths.incomes_file()),
            budgets: RecordRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PocketError> {
        self.expenses.load()?;
        self.incomes.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PocketError> {
        self.expenses.save()?;
        self.incomes.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Remove a record of any kind by id, saving the affected file
    pub fn remove(&self, id: &str) -> Result<RecordKind, PocketError> {
        if self.expenses.remove(id)?.is_some() {
            self.expenses.save()?;
            return Ok(RecordKind::Expense);
        }
        if self.incomes.remove(id)?.is_some() {
            self.incomes.save()?;
            return Ok(RecordKind::Income);
        }
        if self.budgets.remove(id)?.is_some() {
            self.budgets.save()?;
            return Ok(RecordKind::Budget);
        }
        Err(PocketError::record_not_found(id))
    }
}
