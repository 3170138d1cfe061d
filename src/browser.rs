//! Restaurant browser state
//!
//! `MealPicker` owns the in-memory restaurant list, the current selection and
//! the last random pick. Every mutation of the list is followed by a save.

use uuid::Uuid;

use crate::editor::RestaurantDraft;
use crate::persistence::{LoadOutcome, RestaurantStore};
use crate::platform::SettingsStorage;
use crate::restaurant::{Meal, Restaurant};

/// Which restaurant is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(Uuid),
}

impl Selection {
    /// Select the first restaurant of `restaurants`, if any
    pub fn first_of(restaurants: &[Restaurant]) -> Self {
        restaurants
            .first()
            .map_or(Selection::NoSelection, |r| Selection::Selected(r.id))
    }

    /// Look the selected restaurant up by id
    pub fn resolve<'a>(&self, restaurants: &'a [Restaurant]) -> Option<&'a Restaurant> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(id) => restaurants.iter().find(|r| r.id == *id),
        }
    }

    /// Drop the selection if its restaurant no longer exists
    pub fn validated(self, restaurants: &[Restaurant]) -> Self {
        match self.resolve(restaurants) {
            Some(_) => self,
            None => Selection::NoSelection,
        }
    }
}

/// Browser session over a restaurant store
#[derive(Debug)]
pub struct MealPicker<'s, S> {
    store: &'s RestaurantStore<S>,
    restaurants: Vec<Restaurant>,
    selection: Selection,
    last_pick: Meal,
}

impl<'s, S: SettingsStorage> MealPicker<'s, S> {
    /// Load the restaurants and select the first one
    pub fn open(store: &'s RestaurantStore<S>) -> Self {
        Self::from_outcome(store, store.load())
    }

    /// Start from an already observed load outcome
    pub fn from_outcome(store: &'s RestaurantStore<S>, outcome: LoadOutcome) -> Self {
        let restaurants = outcome.into_restaurants();
        let selection = Selection::first_of(&restaurants);
        Self {
            store,
            restaurants,
            selection,
            last_pick: Meal::new(),
        }
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected restaurant, if it still exists
    pub fn selected(&self) -> Option<&Restaurant> {
        self.selection.resolve(&self.restaurants)
    }

    /// Select by id; an unknown id clears the selection
    pub fn select(&mut self, id: Uuid) -> Option<&Restaurant> {
        self.selection = Selection::Selected(id).validated(&self.restaurants);
        self.last_pick.clear();
        self.selected()
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::NoSelection;
        self.last_pick.clear();
    }

    /// First restaurant with this name, ignoring case and surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Option<&Restaurant> {
        self.named(name).next()
    }

    /// All restaurants with this name; names are not unique
    pub fn named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Restaurant> + 'a {
        let wanted = name.trim().to_lowercase();
        self.restaurants
            .iter()
            .filter(move |r| r.name.trim().to_lowercase() == wanted)
    }

    /// Result of the last pick (empty before the first pick)
    pub fn last_pick(&self) -> &Meal {
        &self.last_pick
    }

    /// Pick a random meal from the selected restaurant
    pub fn pick_random_meal(&mut self) -> &Meal {
        self.last_pick = self
            .selected()
            .map(Restaurant::random_meal)
            .unwrap_or_default();
        &self.last_pick
    }

    /// Remove the restaurant with `id` and save; false if there was none
    pub fn delete(&mut self, id: Uuid) -> bool {
        let Some(index) = self.restaurants.iter().position(|r| r.id == id) else {
            return false;
        };
        let removed = self.restaurants.remove(index);
        log::info!("Deleted restaurant '{}'", removed.name);

        self.selection = Selection::first_of(&self.restaurants);
        self.last_pick.clear();
        self.store.save(&self.restaurants);
        true
    }

    /// Remove the selected restaurant and save
    pub fn delete_selected(&mut self) -> bool {
        match self.selection {
            Selection::Selected(id) => self.delete(id),
            Selection::NoSelection => false,
        }
    }

    /// Commit an editor draft, save, and select the result
    pub fn commit(&mut self, draft: &RestaurantDraft) -> Option<&Restaurant> {
        let restaurant = draft.commit(&mut self.restaurants)?;
        log::info!(
            "{} restaurant '{}'",
            if draft.is_new() { "Added" } else { "Updated" },
            restaurant.name
        );
        self.store.save(&self.restaurants);
        self.select(restaurant.id)
    }

    /// Replace everything with the default restaurants
    ///
    /// The store overwrites the slot with the defaults if it cannot delete it.
    pub fn reset(&mut self) {
        self.restaurants = self.store.reset_to_default();
        self.selection = Selection::first_of(&self.restaurants);
        self.last_pick.clear();
    }
}
