//! Corner-shop rules: buying food.
//!
//! Food is consumed at the till -- it reduces hunger by a tenth of its
//! calories and never enters the inventory. The hunger reduction can't
//! exceed the hunger the player actually has.

use rand::Rng;

use ratrace_catalog::food;
use ratrace_types::{PlayerState, RuleOutcome};

/// Buy and eat a specific food item by name.
pub fn purchase_food(state: &mut PlayerState, item_name: &str) -> RuleOutcome {
    let Some(item) = food::food_by_name(item_name) else {
        return RuleOutcome::failure("Item not found!");
    };
    buy(state, item)
}

/// Buy and eat a uniformly random affordable item (the legacy browse
/// visit).
pub fn visit_shop(state: &mut PlayerState) -> RuleOutcome {
    let affordable: Vec<&food::FoodItem> = food::FOOD_ITEMS
        .iter()
        .filter(|item| item.cost <= state.money)
        .collect();

    if affordable.is_empty() {
        return RuleOutcome::failure("Not enough money to buy anything!");
    }

    let mut rng = rand::rng();
    let index = rng.random_range(0..affordable.len());
    affordable
        .get(index)
        .map_or_else(|| RuleOutcome::failure("Not enough money to buy anything!"), |item| buy(state, item))
}

/// Charge for the item and apply the hunger reduction.
fn buy(state: &mut PlayerState, item: &food::FoodItem) -> RuleOutcome {
    if !state.try_spend(item.cost) {
        return RuleOutcome::failure(format!("Not enough money to buy {}!", item.name));
    }

    let reduction = food::hunger_reduction(item).min(state.hunger);
    state.update_hunger(-i64::from(reduction));

    RuleOutcome::success(format!(
        "You bought {} for £{} ({} calories). Hunger reduced by {reduction}!",
        item.name, item.cost, item.calories
    ))
}
