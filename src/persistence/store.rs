//! Load/save/reset of the restaurant list
//!
//! The store is a codec plus a slot accessor. It holds no copy of the list;
//! whoever owns the in-memory list calls `save` after each change.

use crate::error::{FallbackReason, StoreError};
use crate::persistence::defaults::default_restaurants;
use crate::platform::SettingsStorage;
use crate::restaurant::Restaurant;

/// Settings slot holding the encoded restaurant list
pub const DEFAULT_SLOT: &str = "savedRestaurants";

/// Result of `RestaurantStore::load`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Decoded from the settings slot
    Loaded(Vec<Restaurant>),
    /// The slot could not be used; these are the built-in restaurants
    FellBackToDefault {
        restaurants: Vec<Restaurant>,
        reason: FallbackReason,
    },
}

impl LoadOutcome {
    pub fn restaurants(&self) -> &[Restaurant] {
        match self {
            LoadOutcome::Loaded(restaurants) => restaurants,
            LoadOutcome::FellBackToDefault { restaurants, .. } => restaurants,
        }
    }

    pub fn into_restaurants(self) -> Vec<Restaurant> {
        match self {
            LoadOutcome::Loaded(restaurants) => restaurants,
            LoadOutcome::FellBackToDefault { restaurants, .. } => restaurants,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::FellBackToDefault { .. })
    }

    /// Why defaults were used, if they were
    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::FellBackToDefault { reason, .. } => Some(reason),
        }
    }
}

/// Restaurant list persisted in one slot of a settings storage
#[derive(Debug)]
pub struct RestaurantStore<S> {
    storage: S,
    slot: String,
}

impl<S: SettingsStorage> RestaurantStore<S> {
    /// Store using the default slot name
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load saved restaurants, falling back to the defaults on any failure
    pub fn load(&self) -> LoadOutcome {
        match self.read() {
            Ok(restaurants) => {
                log::info!("Loaded {} restaurants", restaurants.len());
                LoadOutcome::Loaded(restaurants)
            }
            Err(reason) => {
                match &reason {
                    FallbackReason::Missing => log::info!("Using default restaurants"),
                    other => log::warn!("Using default restaurants: {}", other),
                }
                LoadOutcome::FellBackToDefault {
                    restaurants: default_restaurants(),
                    reason,
                }
            }
        }
    }

    fn read(&self) -> Result<Vec<Restaurant>, FallbackReason> {
        let bytes = self
            .storage
            .get(&self.slot)
            .map_err(|e| FallbackReason::Storage(e.to_string()))?
            .ok_or(FallbackReason::Missing)?;

        serde_json::from_slice(&bytes).map_err(|e| FallbackReason::Malformed(e.to_string()))
    }

    /// Save the whole list, overwriting the slot; failures are only logged
    pub fn save(&self, restaurants: &[Restaurant]) {
        if let Err(e) = self.try_save(restaurants) {
            log::warn!("Restaurants not saved: {}", e);
        }
    }

    /// Save the whole list, reporting failures
    pub fn try_save(&self, restaurants: &[Restaurant]) -> Result<(), StoreError> {
        let json = serde_json::to_vec(restaurants)?;
        self.storage.set(&self.slot, &json)?;
        log::info!("Restaurants saved ({} entries)", restaurants.len());
        Ok(())
    }

    /// Delete the saved list and return the default restaurants
    ///
    /// When the slot cannot be deleted it is overwritten with the defaults so
    /// custom restaurants do not come back on the next load.
    pub fn reset_to_default(&self) -> Vec<Restaurant> {
        let defaults = default_restaurants();
        match self.storage.remove(&self.slot) {
            Ok(()) => log::info!("Saved restaurants cleared"),
            Err(e) => {
                log::warn!("Saved restaurants not cleared: {}", e);
                self.save(&defaults);
            }
        }
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::platform::{FileStorage, MemoryStorage};
    use crate::restaurant::menu_of;

    /// Storage where every operation fails
    struct BrokenStorage;

    impl SettingsStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }
    }

    /// Memory storage whose slots can be written but never deleted
    #[derive(Default)]
    struct StickyStorage {
        inner: MemoryStorage,
    }

    impl SettingsStorage for StickyStorage {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
            self.inner.set(key, value)
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }
    }

    fn custom_list() -> Vec<Restaurant> {
        vec![
            Restaurant::new(
                "Taco Stand",
                menu_of([("Main Dish", vec!["Al Pastor", "Carnitas"]), ("Drink", vec!["Horchata"])]),
            ),
            Restaurant::new("Noodle Bar", menu_of([("Main Dish", vec!["Ramen", "Ramen"])])),
        ]
    }

    #[test]
    fn test_load_missing_falls_back() {
        let store = RestaurantStore::new(MemoryStorage::new());
        let outcome = store.load();
        assert_eq!(outcome.fallback_reason(), Some(&FallbackReason::Missing));
        assert_eq!(outcome.into_restaurants(), default_restaurants());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = RestaurantStore::new(MemoryStorage::new());
        let list = custom_list();
        store.save(&list);

        let outcome = store.load();
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.restaurants(), list.as_slice());
    }

    #[test]
    fn test_save_overwrites_previous_list() {
        let store = RestaurantStore::new(MemoryStorage::new());
        store.save(&custom_list());
        store.save(&[]);
        assert_eq!(store.load(), LoadOutcome::Loaded(Vec::new()));
    }

    #[test]
    fn test_malformed_slot_falls_back() {
        let storage = MemoryStorage::new();
        storage.set(DEFAULT_SLOT, b"{not json").unwrap();
        let store = RestaurantStore::new(&storage);

        let outcome = store.load();
        assert!(matches!(
            outcome.fallback_reason(),
            Some(FallbackReason::Malformed(_))
        ));
        assert_eq!(outcome.restaurants(), default_restaurants().as_slice());
    }

    #[test]
    fn test_schema_mismatch_falls_back() {
        let storage = MemoryStorage::new();
        storage
            .set(DEFAULT_SLOT, br#"[{"id": "not-a-uuid", "name": "X", "menu": {}}]"#)
            .unwrap();
        let store = RestaurantStore::new(&storage);
        assert!(store.load().is_fallback());
    }

    #[test]
    fn test_decodes_uppercase_ids() {
        let storage = MemoryStorage::new();
        storage
            .set(
                DEFAULT_SLOT,
                br#"[{"id":"E621E1F8-C36C-495A-93FC-0C247A3E6E5F","name":"Cafe","menu":{"Drink":["Latte"]}}]"#,
            )
            .unwrap();
        let store = RestaurantStore::new(&storage);

        let list = store.load().into_restaurants();
        assert_eq!(list.len(), 1);
        assert_eq!(
            list[0].id.to_string(),
            "e621e1f8-c36c-495a-93fc-0c247a3e6e5f"
        );
        assert_eq!(list[0].menu["Drink"], vec!["Latte".to_string()]);
    }

    #[test]
    fn test_reset_clears_slot() {
        let storage = MemoryStorage::new();
        let store = RestaurantStore::new(&storage);
        store.save(&custom_list());

        let reset = store.reset_to_default();
        assert_eq!(reset, default_restaurants());
        assert!(!storage.contains(DEFAULT_SLOT));
        assert_eq!(store.load().into_restaurants(), reset);
        assert_eq!(store.reset_to_default(), reset);
    }

    #[test]
    fn test_unreadable_storage_falls_back() {
        let store = RestaurantStore::new(BrokenStorage);
        let outcome = store.load();
        assert!(matches!(
            outcome.fallback_reason(),
            Some(FallbackReason::Storage(_))
        ));
        assert_eq!(outcome.into_restaurants(), default_restaurants());
    }

    #[test]
    fn test_failed_save_is_only_reported_by_try_save() {
        let store = RestaurantStore::new(BrokenStorage);
        store.save(&custom_list());
        assert!(matches!(
            store.try_save(&custom_list()),
            Err(StoreError::Storage(StorageError::Unavailable(_)))
        ));
    }

    #[test]
    fn test_reset_with_broken_storage_returns_defaults() {
        let store = RestaurantStore::new(BrokenStorage);
        assert_eq!(store.reset_to_default(), default_restaurants());
    }

    #[test]
    fn test_reset_overwrites_slot_it_cannot_delete() {
        let storage = StickyStorage::default();
        let store = RestaurantStore::new(&storage);
        store.save(&custom_list());

        let reset = store.reset_to_default();
        assert_eq!(reset, default_restaurants());
        assert_eq!(store.load(), LoadOutcome::Loaded(default_restaurants()));
    }

    #[test]
    fn test_delete_then_save_persists_reduced_list() {
        let store = RestaurantStore::new(MemoryStorage::new());
        let mut list = custom_list();
        list.extend(default_restaurants());
        store.save(&list);

        let removed = list[1].id;
        let kept: Vec<_> = list.iter().filter(|r| r.id != removed).cloned().collect();
        list.retain(|r| r.id != removed);
        store.save(&list);

        let loaded = store.load().into_restaurants();
        assert_eq!(loaded, kept);
        assert!(loaded.iter().all(|r| r.id != removed));
    }

    #[test]
    fn test_custom_slot_on_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let store = RestaurantStore::with_slot(FileStorage::new(dir.path()), "lunch");
        let list = custom_list();
        store.try_save(&list).unwrap();

        assert!(dir.path().join("lunch.json").exists());
        let reopened = RestaurantStore::with_slot(FileStorage::new(dir.path()), "lunch");
        assert_eq!(reopened.load().into_restaurants(), list);
    }

    #[test]
    fn test_persisted_layout() {
        let store = RestaurantStore::new(MemoryStorage::new());
        let r = Restaurant::new("Pho", menu_of([("Main Dish", vec!["Pho Bo"])]));
        store.save(std::slice::from_ref(&r));

        let bytes = store.storage().get(DEFAULT_SLOT).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value[0]["id"], r.id.to_string());
        assert_eq!(value[0]["name"], "Pho");
        assert_eq!(value[0]["menu"]["Main Dish"][0], "Pho Bo");
    }
}
