//! Preference store persisted as a single JSON object on disk.

mod error;
mod store;

pub use error::{JsonFileError, JsonFileResult};
pub use store::JsonFileStore;

use crate::dao::storage::StorageError;

impl From<JsonFileError> for StorageError {
    fn from(err: JsonFileError) -> Self {
        StorageError::unavailable(err.to_string(), err)
    }
}
