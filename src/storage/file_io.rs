//! JSON file persistence
//!
//! Record files are replaced whole: the new contents go to a sibling
//! `.tmp` file which is synced and renamed over the target, so a crash
//! leaves either the old file or the new one.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PocketError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> PocketError {
    PocketError::Storage(format!("{} {}: {}", action, path.display(), err))
}

/// Load a JSON file, or `T::default()` when it has not been written yet
pub fn read_json<T, P>(path: P) -> Result<T, PocketError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} not found, starting empty", path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(storage_error("Failed to open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| storage_error("Failed to parse", path, e))
}

/// Serialize `data` as pretty JSON and atomically replace `path` with it
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), PocketError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| storage_error("Failed to serialize", path, e))?;
    bytes.push(b'\n');

    replace_file(path, &bytes)?;
    log::trace!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn replace_file(path: &Path, bytes: &[u8]) -> Result<(), PocketError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("Failed to create", dir, e))?;
    }

    let staging = path.with_extension("json.tmp");
    let written = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&staging)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        });

    if let Err(e) = written.and_then(|_| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(storage_error("Failed to write", path, e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
    struct Ledger {
        owner: String,
        entries: Vec<i64>,
    }

    #[test]
    fn test_missing_file_reads_as_default() {
        let dir = TempDir::new().unwrap();
        let ledger: Ledger = read_json(dir.path().join("absent.json")).unwrap();
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn test_write_creates_parent_and_cleans_staging() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("ledger.json");
        let ledger = Ledger {
            owner: "sam".to_string(),
            entries: vec![1233, -500],
        };

        write_json_atomic(&path, &ledger).unwrap();

        assert!(!dir.path().join("data").join("ledger.json.tmp").exists());
        assert_eq!(read_json::<Ledger, _>(&path).unwrap(), ledger);
    }

    #[test]
    fn test_rewrite_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        write_json_atomic(&path, &Ledger { owner: "a".into(), entries: vec![1, 2, 3] }).unwrap();
        write_json_atomic(&path, &Ledger { owner: "b".into(), entries: vec![] }).unwrap();

        let loaded: Ledger = read_json(&path).unwrap();
        assert_eq!(loaded.owner, "b");
        assert!(loaded.entries.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ owner: ").unwrap();

        let err = read_json::<Ledger, _>(&path).unwrap_err();
        assert!(matches!(err, PocketError::Storage(_)));
    }
}
