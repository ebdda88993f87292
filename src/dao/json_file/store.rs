use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::dao::{PreferenceStore, storage::StorageResult};

use super::error::{JsonFileError, JsonFileResult};

/// Preference store backed by a JSON object file.
///
/// The whole map is loaded when the store is opened and the file is rewritten on every
/// `set_string`, so a value is durable as soon as the call returns. Each rewrite goes
/// through a sibling `.tmp` file renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: IndexMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is treated as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> JsonFileResult<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => IndexMap::new(),
            Ok(contents) => serde_json::from_str::<IndexMap<String, String>>(&contents)
                .map_err(|source| JsonFileError::Parse {
                    path: path.clone(),
                    source,
                })?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "preferences file not found; starting empty"
                );
                IndexMap::new()
            }
            Err(source) => return Err(JsonFileError::Read { path, source }),
        };

        debug!(path = %path.display(), count = values.len(), "opened preferences file");
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> JsonFileResult<()> {
        let encoded =
            serde_json::to_string_pretty(&self.values).map_err(|source| JsonFileError::Encode {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| JsonFileError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        // Replace the file in one rename so a crash never leaves it half written.
        let staging = self.staging_path();
        let written = fs::write(&staging, encoded).and_then(|()| fs::rename(&staging, &self.path));
        written.map_err(|source| {
            let _ = fs::remove_file(&staging);
            JsonFileError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get_string(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            // Keep memory consistent with what is actually on disk.
            match previous {
                Some(old) => {
                    self.values.insert(key.to_string(), old);
                }
                None => {
                    self.values.shift_remove(key);
                }
            }
            return Err(err.into());
        }
        Ok(())
    }
}
