//! Restaurant editor state
//!
//! A draft is edited freely (empty categories allowed) and turned into a
//! `Restaurant` on commit. Committing replaces the record with the same id,
//! or appends when the draft is new.

use uuid::Uuid;

use crate::restaurant::{Menu, Restaurant};

/// Categories a new restaurant starts with
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Main Dish", "Side Dish", "Extra", "Drink"];

/// Editable copy of a restaurant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDraft {
    editing: Option<Uuid>,
    pub name: String,
    menu: Menu,
    selected_category: Option<String>,
}

impl Default for RestaurantDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl RestaurantDraft {
    /// Draft for a new restaurant with the default (empty) categories
    pub fn new() -> Self {
        let menu = DEFAULT_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), Vec::new()))
            .collect();
        Self {
            editing: None,
            name: String::new(),
            menu,
            selected_category: DEFAULT_CATEGORIES.first().map(|c| c.to_string()),
        }
    }

    /// Draft pre-filled from an existing restaurant
    pub fn edit(restaurant: &Restaurant) -> Self {
        Self {
            editing: Some(restaurant.id),
            name: restaurant.name.clone(),
            menu: restaurant.menu.clone(),
            selected_category: restaurant.menu.keys().next().cloned(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.editing.is_none()
    }

    /// Id of the restaurant being edited
    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Select a category; unknown names are ignored
    pub fn select_category(&mut self, category: &str) {
        if self.menu.contains_key(category) {
            self.selected_category = Some(category.to_string());
        }
    }

    /// Add an empty category and select it
    ///
    /// Returns false when the trimmed name is empty or already present.
    pub fn add_category(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.menu.contains_key(trimmed) {
            return false;
        }
        self.menu.insert(trimmed.to_string(), Vec::new());
        self.selected_category = Some(trimmed.to_string());
        true
    }

    /// Remove a category and its items
    pub fn delete_category(&mut self, category: &str) -> bool {
        if self.menu.remove(category).is_none() {
            return false;
        }
        if self.selected_category.as_deref() == Some(category) {
            self.selected_category = self.menu.keys().next().cloned();
        }
        true
    }

    /// Append an item to an existing category
    pub fn add_item(&mut self, category: &str, item: &str) -> bool {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.menu.get_mut(category) {
            Some(items) => {
                items.push(trimmed.to_string());
                true
            }
            None => false,
        }
    }

    /// Append comma-separated items, creating the category if needed
    ///
    /// Returns how many items were added.
    pub fn add_items_from_list(&mut self, category: &str, list: &str) -> usize {
        let category = category.trim();
        if category.is_empty() {
            return 0;
        }
        let items = self.menu.entry(category.to_string()).or_default();
        let before = items.len();
        items.extend(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
        items.len() - before
    }

    /// Remove the first item equal to `item`
    pub fn delete_item(&mut self, category: &str, item: &str) -> bool {
        let Some(items) = self.menu.get_mut(category) else {
            return false;
        };
        match items.iter().position(|i| i == item) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove items at the given offsets; out-of-range offsets are ignored
    pub fn delete_items_at(&mut self, category: &str, offsets: &[usize]) {
        if let Some(items) = self.menu.get_mut(category) {
            let mut index = 0;
            items.retain(|_| {
                let keep = !offsets.contains(&index);
                index += 1;
                keep
            });
        }
    }

    /// A draft can be committed once it has a non-blank name
    pub fn can_commit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Build the restaurant: trimmed name, empty categories dropped
    pub fn build(&self) -> Option<Restaurant> {
        if !self.can_commit() {
            return None;
        }
        let menu: Menu = self
            .menu
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(c, items)| (c.clone(), items.clone()))
            .collect();
        let id = self.editing.unwrap_or_else(Uuid::new_v4);
        Some(Restaurant::with_id(id, self.name.trim(), menu))
    }

    /// Replace the record with the same id in `restaurants`, or append
    pub fn commit(&self, restaurants: &mut Vec<Restaurant>) -> Option<Restaurant> {
        let restaurant = self.build()?;
        match restaurants.iter_mut().find(|r| r.id == restaurant.id) {
            Some(existing) => *existing = restaurant.clone(),
            None => restaurants.push(restaurant.clone()),
        }
        Some(restaurant)
    }
}
