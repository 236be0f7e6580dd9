//! JSON persistence helpers for the budget and settings files
//!
//! Saves replace the target file in one rename, so readers see either the
//! previous budgets or the new ones.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ProrataError;

/// Load `T` from `path`, or `T::default()` when nothing has been saved yet
pub fn read_json<T, P>(path: P) -> Result<T, ProrataError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "nothing saved yet, using defaults");
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| ProrataError::Storage(format!("Cannot open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ProrataError::Storage(format!("Cannot parse {}: {}", path.display(), e)))
}

/// Save `data` as pretty JSON, replacing `path` in a single rename
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ProrataError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ProrataError::Storage(format!(
                "Cannot create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Sibling of the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ProrataError::Storage(format!("Cannot create {}: {}", temp_path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ProrataError::Storage(format!("Cannot encode {}: {}", path.display(), e)))?;

    writer
        .flush()
        .map_err(|e| ProrataError::Storage(format!("Cannot write {}: {}", temp_path.display(), e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ProrataError::Storage(format!("Cannot sync {}: {}", temp_path.display(), e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ProrataError::Storage(format!("Cannot replace {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Budget;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Vec<Budget> = read_json(&path).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");

        let data = vec![
            Budget::new("200003", 31.0).unwrap(),
            Budget::new("200004", 300.0).unwrap(),
        ];

        write_json_atomic(&path, &data).unwrap();
        let loaded: Vec<Budget> = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");

        write_json_atomic(&path, &Vec::<Budget>::new()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("budgets.json.tmp").exists());
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");

        write_json_atomic(&path, &vec![Budget::new("200003", 31.0).unwrap()]).unwrap();
        write_json_atomic(&path, &vec![Budget::new("200004", 300.0).unwrap()]).unwrap();

        let loaded: Vec<Budget> = read_json(&path).unwrap();
        assert_eq!(loaded, vec![Budget::new("200004", 300.0).unwrap()]);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data").join("budgets.json");

        write_json_atomic(&path, &Vec::<Budget>::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Vec<Budget>, _>(&path).unwrap_err();
        assert!(matches!(err, ProrataError::Storage(_)));
    }
}
