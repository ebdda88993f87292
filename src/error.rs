use std::path::PathBuf;

use thiserror::Error;
use validator::ValidationErrors;

use crate::dao::storage::StorageError;

/// Errors raised while decoding a persisted leaderboard record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The text is not `username rank score time` with valid numbers.
    #[error("malformed record `{input}`: {reason}")]
    Malformed {
        /// Raw text that failed to parse.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },
}

impl RecordError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        RecordError::Malformed {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Problem found while loading a leaderboard slot; the slot is treated as empty.
#[derive(Debug, Error)]
pub enum LeaderboardWarning {
    /// The store could not be read for this slot.
    #[error("could not read leaderboard slot `{key}`")]
    Unreadable {
        /// Preference key of the slot.
        key: &'static str,
        /// Underlying storage failure.
        #[source]
        source: StorageError,
    },
    /// The persisted text is not a valid record.
    #[error("ignoring corrupt leaderboard slot `{key}`")]
    Malformed {
        /// Preference key of the slot.
        key: &'static str,
        /// Decoding failure.
        #[source]
        source: RecordError,
    },
}

/// A leaderboard slot could not be written back to the store.
#[derive(Debug, Error)]
#[error("failed to persist leaderboard slot `{key}`")]
pub struct PersistError {
    /// Preference key of the slot.
    pub key: &'static str,
    /// Underlying storage failure.
    #[source]
    pub source: StorageError,
}

/// Errors raised while loading the session configuration strictly.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config `{}`", path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for [`crate::config::SessionConfig`].
    #[error("failed to parse config")]
    Parse(#[source] serde_json::Error),
    /// The configuration parsed but holds out-of-range values.
    #[error("invalid config: {0}")]
    Invalid(#[from] ValidationErrors),
}
