//! Platform abstraction layer
//!
//! Handles native/browser differences for:
//! - Settings storage (files on native, LocalStorage on web)

pub mod storage;

pub use storage::{FileStorage, MemoryStorage, SettingsStorage};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
