//! Session configuration loading.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::{error::ConfigError, state::record::DEFAULT_USERNAME};

/// Default location on disk where the session configuration is looked up.
const DEFAULT_CONFIG_PATH: &str = "config/session.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SESSION_LEADERBOARD_CONFIG_PATH";
/// Score that wins a session when nothing else is configured.
pub const DEFAULT_TARGET_SCORE: u32 = 5;

/// Tunables of a play session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Score at which the session is won.
    #[validate(range(min = 1))]
    pub target_score: u32,
    /// Name stored for players who did not enter one.
    #[validate(length(min = 1))]
    pub default_username: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            default_username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl SessionConfig {
    /// Load the configuration from disk, falling back to the built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match Self::from_path(&path) {
            Ok(config) => {
                info!(
                    path = %path.display(),
                    target_score = config.target_score,
                    "loaded session config"
                );
                config
            }
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Read and validate the configuration stored at `path`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse and validate a JSON configuration; missing fields take their defaults.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}

fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
