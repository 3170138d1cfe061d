//! Application configuration
//!
//! Resolved once at start-up: explicit values (command line or environment)
//! win over the platform defaults.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::persistence::DEFAULT_SLOT;
use crate::persistence::RestaurantStore;
use crate::platform::FileStorage;

/// Directory name under the platform data directory
pub const APP_DIR_NAME: &str = "meal-picker";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the settings slot files
    pub data_dir: PathBuf,
    /// Settings slot holding the restaurant list
    pub slot: String,
}

impl Config {
    /// Resolve against the platform data directory
    pub fn resolve(data_dir: Option<PathBuf>, slot: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve_with(data_dir, slot, default_data_dir())
    }

    /// Resolve against an explicit fallback directory
    pub fn resolve_with(
        data_dir: Option<PathBuf>,
        slot: Option<String>,
        fallback_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let data_dir = data_dir.or(fallback_dir).ok_or(ConfigError::NoDataDir)?;

        let slot = slot.unwrap_or_else(|| DEFAULT_SLOT.to_string());
        let slot = slot.trim();
        if slot.is_empty() {
            return Err(ConfigError::EmptySlot);
        }
        if slot.contains(['/', '\\']) || slot.contains("..") {
            return Err(ConfigError::InvalidSlot(slot.to_string()));
        }

        Ok(Self {
            data_dir,
            slot: slot.to_string(),
        })
    }

    /// Open the restaurant store this configuration points at
    pub fn open_store(&self) -> RestaurantStore<FileStorage> {
        RestaurantStore::with_slot(FileStorage::new(&self.data_dir), self.slot.clone())
    }
}

/// `<platform data dir>/meal-picker`, if the platform has one
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR_NAME))
}
