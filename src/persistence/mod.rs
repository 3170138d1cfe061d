//! Restaurant list persistence
//!
//! Features:
//! - Whole-list JSON encoding in a single settings slot
//! - Fallback to the built-in restaurants when the slot is missing or corrupt
//! - Reset by deleting the slot

pub mod defaults;
pub mod store;

pub use defaults::default_restaurants;
pub use store::{DEFAULT_SLOT, LoadOutcome, RestaurantStore};
