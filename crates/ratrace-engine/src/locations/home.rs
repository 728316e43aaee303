//! Home rules: resting, scaled by flat tier.
//!
//! Better homes rest better. The table values are sized for a two-hour
//! rest block; even sleeping rough always recovers at least one point.

use ratrace_types::{PlayerState, RuleOutcome};

/// Rest effects for one flat tier.
struct RestBenefit {
    /// Tiredness removed by one rest.
    tiredness_reduction: u32,
    /// Happiness added by one rest.
    happiness_boost: u32,
    /// How the rest spot reads in messages.
    description: &'static str,
}

/// Rest effects indexed by flat tier 0--5.
const REST_BENEFITS: [RestBenefit; 6] = [
    RestBenefit { tiredness_reduction: 4, happiness_boost: 0, description: "rough night on the streets" },
    RestBenefit { tiredness_reduction: 5, happiness_boost: 1, description: "dingy bedsit" },
    RestBenefit { tiredness_reduction: 8, happiness_boost: 1, description: "basic studio" },
    RestBenefit { tiredness_reduction: 10, happiness_boost: 3, description: "comfortable flat" },
    RestBenefit { tiredness_reduction: 13, happiness_boost: 4, description: "stylish apartment" },
    RestBenefit { tiredness_reduction: 15, happiness_boost: 5, description: "luxury penthouse" },
];

/// Rest at home (the default home visit).
pub fn visit_home(state: &mut PlayerState) -> RuleOutcome {
    let tier = usize::from(state.flat_tier.min(5));
    let benefit = &REST_BENEFITS[tier];

    let reduction = benefit.tiredness_reduction.max(1);
    let old_tiredness = state.tiredness;
    state.update_tiredness(-i64::from(reduction));
    let tiredness_reduced = old_tiredness - state.tiredness;

    let old_happiness = state.happiness;
    state.update_happiness(i64::from(benefit.happiness_boost));
    let happiness_gained = state.happiness - old_happiness;

    let homeless = state.flat_tier == 0;

    let message = if tiredness_reduced == 0 {
        if homeless {
            String::from("You found a spot to rest, but you were already well rested.")
        } else {
            format!(
                "You relaxed in your {}, but you were already well rested.",
                benefit.description
            )
        }
    } else if homeless {
        format!("You found a spot to sleep rough. Tiredness reduced by {tiredness_reduced}.")
    } else if happiness_gained > 0 {
        format!(
            "You rested in your {}. Tiredness reduced by {tiredness_reduced}! Happiness +{happiness_gained}.",
            benefit.description
        )
    } else {
        format!(
            "You rested in your {}. Tiredness reduced by {tiredness_reduced}.",
            benefit.description
        )
    };

    RuleOutcome::success(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_three_rest_matches_the_table() {
        let mut state = PlayerState::new();
        state.flat_tier = 3;
        state.rent = 50;
        state.tiredness = 40;
        state.happiness = 50;
        let outcome = visit_home(&mut state);
        assert!(outcome.success);
        assert_eq!(state.tiredness, 30);
        assert_eq!(state.happiness, 53);
    }

    #[test]
    fn sleeping_rough_still_recovers_at_least_one_point() {
        let mut state = PlayerState::new();
        state.flat_tier = 0;
        state.tiredness = 1;
        let outcome = visit_home(&mut state);
        assert!(outcome.success);
        assert_eq!(state.tiredness, 0);
        assert!(outcome.message.contains("sleep rough"));
    }

    #[test]
    fn already_rested_player_gets_a_gentle_message() {
        let mut state = PlayerState::new();
        state.tiredness = 0;
        let outcome = visit_home(&mut state);
        assert!(outcome.success);
        assert!(outcome.message.contains("already well rested"));
        assert_eq!(state.tiredness, 0);
    }

    #[test]
    fn penthouse_rest_is_the_best_in_town() {
        let mut state = PlayerState::new();
        state.flat_tier = 5;
        state.tiredness = 50;
        state.happiness = 50;
        let outcome = visit_home(&mut state);
        assert!(outcome.success);
        assert_eq!(state.tiredness, 35);
        assert_eq!(state.happiness, 55);
        assert!(outcome.message.contains("penthouse"));
    }

    #[test]
    fn happiness_boost_clamps_at_the_ceiling() {
        let mut state = PlayerState::new();
        state.flat_tier = 5;
        state.tiredness = 50;
        state.happiness = 100;
        let outcome = visit_home(&mut state);
        assert!(outcome.success);
        assert_eq!(state.happiness, 100);
        // No happiness line when nothing was gained.
        assert!(!outcome.message.contains("Happiness"));
    }
}
