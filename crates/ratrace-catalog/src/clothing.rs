//! John Lewis stock and the appearance computation.
//!
//! Clothing purchases persist into the inventory and improve the player's
//! look level; furniture is just for the flat. The look level is derived
//! purely from how many owned items are clothing (duplicates count).

use serde::Serialize;

/// Department an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreCategory {
    /// Counts toward the look level.
    Clothing,
    /// Does not affect appearance.
    Furniture,
}

/// One item on the John Lewis shop floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreItem {
    /// Item name as shown to the player and stored in the inventory.
    pub name: &'static str,
    /// Price in pounds.
    pub cost: i64,
    /// Department.
    pub category: StoreCategory,
}

/// The full John Lewis stock: workwear, casual wear, then furniture.
pub const STORE_ITEMS: [StoreItem; 27] = [
    StoreItem { name: "Formal Suit", cost: 250, category: StoreCategory::Clothing },
    StoreItem { name: "Blazer", cost: 180, category: StoreCategory::Clothing },
    StoreItem { name: "Dress Shirt", cost: 65, category: StoreCategory::Clothing },
    StoreItem { name: "Oxford Shirt", cost: 55, category: StoreCategory::Clothing },
    StoreItem { name: "Dress Trousers", cost: 90, category: StoreCategory::Clothing },
    StoreItem { name: "Chinos", cost: 70, category: StoreCategory::Clothing },
    StoreItem { name: "Oxford Shoes", cost: 140, category: StoreCategory::Clothing },
    StoreItem { name: "Brogues", cost: 160, category: StoreCategory::Clothing },
    StoreItem { name: "Silk Tie", cost: 55, category: StoreCategory::Clothing },
    StoreItem { name: "Leather Belt", cost: 45, category: StoreCategory::Clothing },
    StoreItem { name: "Waistcoat", cost: 95, category: StoreCategory::Clothing },
    StoreItem { name: "Cufflinks", cost: 40, category: StoreCategory::Clothing },
    StoreItem { name: "Winter Coat", cost: 120, category: StoreCategory::Clothing },
    StoreItem { name: "Polo Shirt", cost: 45, category: StoreCategory::Clothing },
    StoreItem { name: "Trainers", cost: 95, category: StoreCategory::Clothing },
    StoreItem { name: "Leather Boots", cost: 150, category: StoreCategory::Clothing },
    StoreItem { name: "Cashmere Jumper", cost: 100, category: StoreCategory::Clothing },
    StoreItem { name: "Jeans", cost: 60, category: StoreCategory::Clothing },
    StoreItem { name: "Wool Scarf", cost: 45, category: StoreCategory::Clothing },
    StoreItem { name: "Armchair", cost: 350, category: StoreCategory::Furniture },
    StoreItem { name: "Coffee Table", cost: 180, category: StoreCategory::Furniture },
    StoreItem { name: "Floor Lamp", cost: 90, category: StoreCategory::Furniture },
    StoreItem { name: "Bookshelf", cost: 220, category: StoreCategory::Furniture },
    StoreItem { name: "Bedside Table", cost: 120, category: StoreCategory::Furniture },
    StoreItem { name: "Desk", cost: 280, category: StoreCategory::Furniture },
    StoreItem { name: "Rug", cost: 150, category: StoreCategory::Furniture },
    StoreItem { name: "Mirror", cost: 75, category: StoreCategory::Furniture },
];

/// Look up a store item by its exact name.
pub fn item_by_name(name: &str) -> Option<&'static StoreItem> {
    STORE_ITEMS.iter().find(|item| item.name == name)
}

/// Whether an inventory entry is a clothing item.
pub fn is_clothing(name: &str) -> bool {
    item_by_name(name).is_some_and(|item| item.category == StoreCategory::Clothing)
}

/// Compute the look level (1--5) from an inventory.
///
/// Thresholds on the owned clothing count: 0 items is level 1, up to 2 is
/// level 2, up to 4 is level 3, up to 7 is level 4, more is level 5.
pub fn look_level(items: &[String]) -> u8 {
    let clothing_count = items.iter().filter(|item| is_clothing(item.as_str())).count();
    match clothing_count {
        0 => 1,
        1..=2 => 2,
        3..=4 => 3,
        5..=7 => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn lookup_by_name() {
        let Some(suit) = item_by_name("Formal Suit") else {
            panic!("Formal Suit missing from stock");
        };
        assert_eq!(suit.cost, 250);
        assert_eq!(suit.category, StoreCategory::Clothing);
    }

    #[test]
    fn furniture_is_not_clothing() {
        assert!(is_clothing("Blazer"));
        assert!(!is_clothing("Armchair"));
        assert!(!is_clothing("Secondhand Bicycle"));
    }

    #[test]
    fn look_level_thresholds() {
        assert_eq!(look_level(&inventory(&[])), 1);
        assert_eq!(look_level(&inventory(&["Jeans"])), 2);
        assert_eq!(look_level(&inventory(&["Jeans", "Trainers"])), 2);
        assert_eq!(look_level(&inventory(&["Jeans", "Trainers", "Blazer"])), 3);
        assert_eq!(
            look_level(&inventory(&["Jeans", "Trainers", "Blazer", "Chinos", "Silk Tie"])),
            4
        );
        assert_eq!(
            look_level(&inventory(&[
                "Jeans",
                "Trainers",
                "Blazer",
                "Chinos",
                "Silk Tie",
                "Brogues",
                "Waistcoat",
                "Formal Suit",
            ])),
            5
        );
    }

    #[test]
    fn furniture_does_not_raise_the_look() {
        let flat_full_of_furniture = inventory(&["Armchair", "Desk", "Rug", "Mirror"]);
        assert_eq!(look_level(&flat_full_of_furniture), 1);
    }

    #[test]
    fn duplicate_clothing_counts() {
        assert_eq!(look_level(&inventory(&["Jeans", "Jeans", "Jeans"])), 3);
    }
}
