//! Estate agent rules: browsing the listings and renting flats.
//!
//! Renting swaps the tenancy immediately -- no deposit, no notice period.
//! Tier 0 means giving the flat up and sleeping rough.

use ratrace_catalog::flats;
use ratrace_types::{PlayerState, RuleOutcome};

/// Browse the listings (the default estate agent visit).
pub fn visit_estate_agent(state: &mut PlayerState) -> RuleOutcome {
    if state.flat_tier == 0 {
        return RuleOutcome::success(
            "Welcome! You're currently homeless. Browse our selection of flats to find your new home.",
        );
    }

    let name = flats::flat_label(state.flat_tier);
    RuleOutcome::success(format!(
        "Welcome back! You're currently renting a {name} for £{}/day. Looking to upgrade?",
        state.rent
    ))
}

/// Rent a flat of the given tier, or give the flat up (tier 0).
pub fn rent_flat(state: &mut PlayerState, tier: u8) -> RuleOutcome {
    let Some(flat) = flats::flat_by_tier(tier) else {
        return RuleOutcome::failure("Invalid flat selection.");
    };

    let current_tier = state.flat_tier;
    if current_tier == tier {
        if tier == 0 {
            return RuleOutcome::failure("You're already homeless!");
        }
        return RuleOutcome::failure(format!("You're already renting a {}!", flat.name));
    }

    state.flat_tier = tier;
    state.rent = flat.rent;

    let message = if tier == 0 {
        String::from(
            "You've given up your flat and are now homeless. No rent to pay, but sleeping rough is tough.",
        )
    } else if current_tier == 0 {
        format!(
            "Congratulations! You've rented a {} for £{}/day. No more sleeping rough!",
            flat.name, flat.rent
        )
    } else if tier > current_tier {
        format!(
            "Moving up in the world! You've upgraded to a {} for £{}/day.",
            flat.name, flat.rent
        )
    } else {
        format!(
            "You've downgraded to a {} for £{}/day. Every penny counts!",
            flat.name, flat.rent
        )
    };

    RuleOutcome::success(message)
}
