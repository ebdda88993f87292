/// JSON file backed preference store.
pub mod json_file;
/// Well-known preference keys.
pub mod keys;
/// In-memory preference store.
pub mod memory;
/// Storage error types.
pub mod storage;

use crate::dao::storage::{StorageError, StorageResult};

/// Abstraction over the flat key/value string storage that survives restarts.
///
/// Integer values are stored as their decimal string representation.
pub trait PreferenceStore {
    /// Read the string stored under `key`, `None` when nothing was ever written.
    fn get_string(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set_string(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Read an integer value, `None` when absent or blank.
    fn get_int(&self, key: &str) -> StorageResult<Option<i64>> {
        let Some(raw) = self.get_string(key)? else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<i64>()
            .map(Some)
            .map_err(|_| StorageError::NotAnInteger {
                key: key.to_string(),
                value: raw.clone(),
            })
    }

    /// Store an integer value.
    fn set_int(&mut self, key: &str, value: i64) -> StorageResult<()> {
        self.set_string(key, &value.to_string())
    }
}
