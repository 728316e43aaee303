//! The corner-shop food range.
//!
//! Food is consumed at the till: it reduces hunger by a tenth of its
//! calories and never enters the inventory.

use serde::Serialize;

/// One food item on the shop shelves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodItem {
    /// Item name as shown to the player.
    pub name: &'static str,
    /// Price in pounds.
    pub cost: i64,
    /// Calorie content; every 10 calories removes one hunger point.
    pub calories: u32,
}

/// The full food range.
pub const FOOD_ITEMS: [FoodItem; 15] = [
    FoodItem { name: "Apple", cost: 3, calories: 95 },
    FoodItem { name: "Banana", cost: 2, calories: 105 },
    FoodItem { name: "Bread", cost: 5, calories: 265 },
    FoodItem { name: "Milk", cost: 4, calories: 150 },
    FoodItem { name: "Eggs", cost: 6, calories: 155 },
    FoodItem { name: "Cheese", cost: 8, calories: 200 },
    FoodItem { name: "Chicken", cost: 12, calories: 335 },
    FoodItem { name: "Beef", cost: 15, calories: 425 },
    FoodItem { name: "Rice", cost: 7, calories: 205 },
    FoodItem { name: "Pasta", cost: 6, calories: 220 },
    FoodItem { name: "Vegetables", cost: 10, calories: 120 },
    FoodItem { name: "Pizza", cost: 14, calories: 285 },
    FoodItem { name: "Sandwich", cost: 9, calories: 250 },
    FoodItem { name: "Coffee", cost: 5, calories: 95 },
    FoodItem { name: "Chocolate", cost: 4, calories: 210 },
];

/// Look up a food item by its exact name.
pub fn food_by_name(name: &str) -> Option<&'static FoodItem> {
    FOOD_ITEMS.iter().find(|item| item.name == name)
}

/// Hunger points removed by eating this item (`calories / 10`).
pub const fn hunger_reduction(item: &FoodItem) -> u32 {
    item.calories / 10
}
