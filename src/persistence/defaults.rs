//! Built-in restaurants used before anything has been saved
//!
//! Ids are fixed so that every reset produces the same list.

use uuid::Uuid;

use crate::restaurant::{Restaurant, menu_of};

const MCDONALDS_ID: Uuid = Uuid::from_u128(0x6d2f_1c0e_5a4b_4c1e_9f3a_0b7d_2e41_a001);
const BURGER_KING_ID: Uuid = Uuid::from_u128(0x6d2f_1c0e_5a4b_4c1e_9f3a_0b7d_2e41_a002);

/// The default restaurant list
pub fn default_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::with_id(
            MCDONALDS_ID,
            "McDonald's",
            menu_of([
                (
                    "Main Dish",
                    vec!["Big Mac", "Quarter Pounder", "McDouble", "McChicken"],
                ),
                (
                    "Side Dish",
                    vec!["French Fries", "Chicken McNuggets", "Apple Slices"],
                ),
                ("Drink", vec!["Coke", "Sprite", "Fanta"]),
                ("Extra", vec!["Apple Pie", "McFlurry", "Hash Brown"]),
            ]),
        ),
        Restaurant::with_id(
            BURGER_KING_ID,
            "Burger King",
            menu_of([
                (
                    "Main Dish",
                    vec!["Whopper", "Cheeseburger", "Double Stacker", "Chicken Royale"],
                ),
                ("Side Dish", vec!["French Fries", "Onion Rings", "Cheese Bites"]),
                ("Drink", vec!["Pepsi", "Root Beer", "Water"]),
                ("Extra", vec!["Sundae", "Hershey's Pie", "Cookies"]),
            ]),
        ),
    ]
}
