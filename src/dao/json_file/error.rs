//! Error types raised by the JSON file preference store.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias returning [`JsonFileError`] failures.
pub type JsonFileResult<T> = Result<T, JsonFileError>;

/// Failures that can occur while reading or writing the preferences file.
#[derive(Debug, Error)]
pub enum JsonFileError {
    /// The file exists but could not be read.
    #[error("failed to read preferences file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file content is not a JSON object of strings.
    #[error("failed to parse preferences file `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Encoding the preferences to JSON failed.
    #[error("failed to encode preferences for `{}`", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Writing the file (or creating its parent directory) failed.
    #[error("failed to write preferences file `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
