//! Restaurant entity and the random meal pick
//!
//! A restaurant is replaced as a whole when edited; the `id` survives every
//! edit and is what selection and replace-by-id match on.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category name → items, kept sorted by category for display
pub type Menu = BTreeMap<String, Vec<String>>;

/// One proposed meal: category → chosen item
pub type Meal = BTreeMap<String, String>;

/// A restaurant with its categorized menu
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub menu: Menu,
}

impl Restaurant {
    /// Create a restaurant with a fresh id
    pub fn new(name: impl Into<String>, menu: Menu) -> Self {
        Self::with_id(Uuid::new_v4(), name, menu)
    }

    /// Create a restaurant that reuses an existing id (edit path)
    pub fn with_id(id: Uuid, name: impl Into<String>, menu: Menu) -> Self {
        Self {
            id,
            name: name.into(),
            menu,
        }
    }

    /// Pick one item per non-empty category using the thread RNG
    pub fn random_meal(&self) -> Meal {
        self.random_meal_with(&mut rand::rng())
    }

    /// Pick one item per non-empty category using `rng`
    ///
    /// Categories without items are left out of the result.
    pub fn random_meal_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Meal {
        self.menu
            .iter()
            .filter_map(|(category, items)| {
                items
                    .choose(&mut *rng)
                    .map(|item| (category.clone(), item.clone()))
            })
            .collect()
    }

    /// Total number of items across all categories
    pub fn item_count(&self) -> usize {
        self.menu.values().map(Vec::len).sum()
    }

    /// Categories that have at least one item
    pub fn non_empty_categories(&self) -> impl Iterator<Item = &str> {
        self.menu
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(category, _)| category.as_str())
    }
}

/// Build a menu from `(category, items)` pairs
pub fn menu_of<C, I, S>(entries: C) -> Menu
where
    C: IntoIterator<Item = (S, I)>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    entries
        .into_iter()
        .map(|(category, items)| {
            (
                category.into(),
                items.into_iter().map(Into::into).collect(),
            )
        })
        .collect()
}
