//! Error types for settings storage, the restaurant store and configuration

use thiserror::Error;

/// Failure of a single settings storage operation
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on settings slot '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The backing store could not be reached (e.g. no LocalStorage)
    #[error("Settings storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure of an explicit save
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to encode restaurants: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Why `load` returned the default restaurants instead of saved ones
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackReason {
    #[error("no saved restaurants")]
    Missing,

    #[error("could not read saved restaurants: {0}")]
    Storage(String),

    #[error("saved restaurants are malformed: {0}")]
    Malformed(String),
}

/// Invalid configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No data directory available; pass --data-dir or set MEAL_PICKER_DATA_DIR")]
    NoDataDir,

    #[error("Settings slot name must not be empty")]
    EmptySlot,

    #[error("Settings slot name '{0}' must not contain path separators or '..'")]
    InvalidSlot(String),
}
