//! Record repositories for JSON storage
//!
//! One repository per record kind, each backed by its own file. Records are
//! kept newest-first in memory and on disk.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::PocketError;
use crate::models::{Budget, Expense, Income};

use super::file_io::{read_json, write_json_atomic};

/// A record that can live in a [`RecordRepository`]
pub trait StoredRecord: Clone + Serialize + DeserializeOwned {
    /// Display form of the record's id
    fn id_label(&self) -> String;

    /// Whether a user-typed id refers to this record
    fn id_matches(&self, id: &str) -> bool;

    /// Date used to order records, newest first
    fn sort_date(&self) -> NaiveDate;
}

impl StoredRecord for Expense {
    fn id_label(&self) -> String {
        self.id.to_string()
    }

    fn id_matches(&self, id: &str) -> bool {
        self.id.matches_str(id)
    }

    fn sort_date(&self) -> NaiveDate {
        self.date
    }
}

impl StoredRecord for Income {
    fn id_label(&self) -> String {
        self.id.to_string()
    }

    fn id_matches(&self, id: &str) -> bool {
        self.id.matches_str(id)
    }

    fn sort_date(&self) -> NaiveDate {
        self.date
    }
}

impl StoredRecord for Budget {
    fn id_label(&self) -> String {
        self.id.to_string()
    }

    fn id_matches(&self, id: &str) -> bool {
        self.id.matches_str(id)
    }

    fn sort_date(&self) -> NaiveDate {
        self.start
    }
}

/// On-disk file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "T: StoredRecord")]
struct RecordFile<T> {
    #[serde(default)]
    records: Vec<T>,
}

impl<T> Default for RecordFile<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

/// Repository for one kind of record
pub struct RecordRepository<T: StoredRecord> {
    path: PathBuf,
    data: RwLock<Vec<T>>,
}

impl<T: StoredRecord> RecordRepository<T> {
    /// Create a new repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), PocketError> {
        let file_data: RecordFile<T> = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            PocketError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.records;
        sort_newest_first(&mut data);

        log::debug!("loaded {} records from {}", data.len(), self.path.display());
        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), PocketError> {
        let data = self.data.read().map_err(|e| {
            PocketError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = RecordFile {
            records: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// All records, newest first
    pub fn get_all(&self) -> Result<Vec<T>, PocketError> {
        let data = self.data.read().map_err(|e| {
            PocketError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize, PocketError> {
        let data = self.data.read().map_err(|e| {
            PocketError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }

    /// Add a record
    pub fn insert(&self, record: T) -> Result<(), PocketError> {
        let mut data = self.data.write().map_err(|e| {
            PocketError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.push(record);
        sort_newest_first(&mut data);
        Ok(())
    }

    /// Remove the record a user-typed id refers to
    ///
    /// Returns `Ok(None)` when nothing matches. An id prefix matching more
    /// than one record is rejected rather than guessing.
    pub fn remove(&self, id: &str) -> Result<Option<T>, PocketError> {
        let mut data = self.data.write().map_err(|e| {
            PocketError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let positions: Vec<usize> = data
            .iter()
            .enumerate()
            .filter(|(_, record)| record.id_matches(id))
            .map(|(i, _)| i)
            .collect();

        match positions.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(data.remove(*only))),
            _ => Err(PocketError::Validation(format!(
                "Id '{}' is ambiguous ({} records match)",
                id,
                positions.len()
            ))),
        }
    }
}

fn sort_newest_first<T: StoredRecord>(records: &mut [T]) {
    records.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));
}
