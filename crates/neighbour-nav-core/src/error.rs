//! Error types for the navigation core.
//!
//! Navigation itself never fails: missing files or empty folders are
//! modelled as `None`. The errors here cover the edges that do:
//!
//! - [`SettingsError`] - loading and saving [`NavigationSettings`](crate::NavigationSettings)
//! - [`CommandError`] - resolving a command id from the host

use thiserror::Error;

/// Settings persistence errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// Persisted settings are not valid JSON for this schema.
    #[error("invalid settings: {0}")]
    InvalidJson(String),
    /// Backing storage is not available.
    #[error("settings storage not available")]
    StorageUnavailable,
    /// Sort order name is not one of the known values.
    #[error("unknown sort order '{0}'")]
    UnknownSortOrder(String),
    /// Failed to serialize settings.
    #[error("failed to serialize settings")]
    SerializationFailed,
    /// Backing storage rejected the write.
    #[error("failed to save settings")]
    SaveFailed,
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

/// Command lookup errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// No command with this id exists.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
