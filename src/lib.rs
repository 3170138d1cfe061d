//! Meal Picker - keep a list of restaurants and let chance pick the meal
//!
//! Core modules:
//! - `restaurant`: Restaurant entity and random meal pick
//! - `persistence`: Load/save/reset of the restaurant list
//! - `platform`: Settings storage backends (files, memory, LocalStorage on web)
//! - `editor`: Draft state for adding and editing restaurants
//! - `browser`: Selection, last pick and list mutations
//! - `config`: Data directory and slot resolution (native only)

pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod editor;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod restaurant;

pub use browser::{MealPicker, Selection};
pub use editor::RestaurantDraft;
pub use error::{ConfigError, FallbackReason, StorageError, StoreError};
pub use persistence::{LoadOutcome, RestaurantStore};
pub use restaurant::{Meal, Menu, Restaurant};
