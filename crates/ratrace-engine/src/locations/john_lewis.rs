//! John Lewis rules: buying clothing and furniture.
//!
//! Purchases persist into the inventory and lift the mood. The look level
//! is *not* updated here -- the validated-visit post callback calls
//! [`recompute_look`] so the HTTP layer and the NPC tools share one path.

use rand::Rng;

use ratrace_catalog::clothing;
use ratrace_types::{PlayerState, RuleOutcome};

use crate::config::GameConfig;

/// Buy a specific store item by name.
pub fn purchase_item(
    state: &mut PlayerState,
    config: &GameConfig,
    item_name: &str,
) -> RuleOutcome {
    let Some(item) = clothing::item_by_name(item_name) else {
        return RuleOutcome::failure("Item not found!");
    };
    buy(state, config, item)
}

/// Buy a uniformly random affordable item (the legacy browse visit).
pub fn visit_john_lewis(state: &mut PlayerState, config: &GameConfig) -> RuleOutcome {
    let affordable: Vec<&clothing::StoreItem> = clothing::STORE_ITEMS
        .iter()
        .filter(|item| item.cost <= state.money)
        .collect();

    if affordable.is_empty() {
        return RuleOutcome::failure("Not enough money to buy anything at John Lewis!");
    }

    let mut rng = rand::rng();
    let index = rng.random_range(0..affordable.len());
    affordable.get(index).map_or_else(
        || RuleOutcome::failure("Not enough money to buy anything at John Lewis!"),
        |item| buy(state, config, item),
    )
}

/// Recompute the look level from the inventory.
///
/// Run after any purchase that may have added clothing (the validated
/// visit's post callback, the NPC tools, and document upgrade on load).
pub fn recompute_look(state: &mut PlayerState) {
    state.look = clothing::look_level(&state.items);
}

/// Charge for the item, stow it, and apply the retail-therapy boost.
fn buy(
    state: &mut PlayerState,
    config: &GameConfig,
    item: &clothing::StoreItem,
) -> RuleOutcome {
    if !state.try_spend(item.cost) {
        return RuleOutcome::failure(format!("Not enough money to buy {}!", item.name));
    }

    state.add_item(item.name);
    state.update_happiness(i64::from(config.shopping_happiness));

    RuleOutcome::success(format!(
        "You bought {} for £{}! It's now in your inventory. Happiness +{}!",
        item.name, item.cost, config.shopping_happiness
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_persists_into_the_inventory() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.money = 300;
        let outcome = purchase_item(&mut state, &config, "Formal Suit");
        assert!(outcome.success);
        assert_eq!(state.money, 50);
        assert!(state.has_item("Formal Suit"));
        assert_eq!(state.happiness, 60);
    }

    #[test]
    fn look_is_untouched_until_the_post_callback_runs() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.money = 300;
        let _ = purchase_item(&mut state, &config, "Formal Suit");
        assert_eq!(state.look, 1);
        recompute_look(&mut state);
        assert_eq!(state.look, 2);
    }

    #[test]
    fn recompute_look_follows_the_clothing_thresholds() {
        let mut state = PlayerState::new();
        for item in ["Jeans", "Trainers", "Polo Shirt", "Wool Scarf", "Chinos"] {
            state.add_item(item);
        }
        recompute_look(&mut state);
        assert_eq!(state.look, 4);
    }

    #[test]
    fn furniture_purchases_do_not_change_the_look() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.money = 400;
        let outcome = purchase_item(&mut state, &config, "Armchair");
        assert!(outcome.success);
        recompute_look(&mut state);
        assert_eq!(state.look, 1);
    }

    #[test]
    fn unknown_item_fails() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        let outcome = purchase_item(&mut state, &config, "Jetpack");
        assert!(!outcome.success);
        assert_eq!(state.money, 100);
    }

    #[test]
    fn purchase_fails_when_broke() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.money = 10;
        let outcome = purchase_item(&mut state, &config, "Formal Suit");
        assert!(!outcome.success);
        assert_eq!(state.money, 10);
        assert!(state.items.is_empty());
    }

    #[test]
    fn browse_fails_when_nothing_is_affordable() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.money = 10;
        let outcome = visit_john_lewis(&mut state, &config);
        assert!(!outcome.success);
        assert!(outcome.message.contains("John Lewis"));
    }

    #[test]
    fn browse_buys_something_affordable() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.money = 5000;
        let outcome = visit_john_lewis(&mut state, &config);
        assert!(outcome.success);
        assert_eq!(state.items.len(), 1);
        assert!(state.money < 5000);
    }
}
