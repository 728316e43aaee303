//! The day clock: time costs, spending time, and day rollover.
//!
//! Every visit costs travel plus action minutes out of the day's budget.
//! When the remaining budget drops below the new-day threshold the day
//! rolls over: the turn counter advances, overnight effects apply (hunger
//! growth, rent), and the player wakes up at home with a fresh budget.
//!
//! Because every visit cost is validated to stay below a full day
//! ([`GameConfig::validate`]), a single call to [`spend_time`] can trigger
//! at most one rollover.

use ratrace_types::{Location, PlayerState, TurnSummary};

use crate::config::GameConfig;

/// The time price of one visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCost {
    /// Minutes spent travelling.
    pub travel: u32,
    /// Minutes spent on the activity.
    pub action: u32,
}

impl TimeCost {
    /// Total minutes deducted from the day.
    pub const fn total(self) -> u32 {
        self.travel.saturating_add(self.action)
    }
}

/// Result of charging a visit against the day's time budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpentTime {
    /// Minutes spent travelling.
    pub travel: u32,
    /// Minutes spent on the activity.
    pub action: u32,
    /// Whether the budget covered the visit. On `false` nothing changed.
    pub success: bool,
    /// Present when the deduction rolled the day over.
    pub turn_summary: Option<TurnSummary>,
}

/// The travel/action cost for visiting a location.
///
/// Uses the per-location override when configured, the default pair
/// otherwise.
pub fn time_cost(config: &GameConfig, location: Location) -> TimeCost {
    config.time_overrides.get(&location).map_or(
        TimeCost {
            travel: config.travel_minutes,
            action: config.action_minutes,
        },
        |over| TimeCost {
            travel: over.travel,
            action: over.action,
        },
    )
}

/// Whether the day's remaining budget covers a visit to the location.
pub fn has_enough_time(state: &PlayerState, config: &GameConfig, location: Location) -> bool {
    state.time_remaining >= time_cost(config, location).total()
}

/// Charge a visit against the day and move the player there.
///
/// On insufficient time returns `success = false` without mutating the
/// state. Otherwise deducts the total cost, sets the current location,
/// and -- if the remaining budget has dropped below the new-day
/// threshold -- rolls the day over (at most once).
pub fn spend_time(
    state: &mut PlayerState,
    config: &GameConfig,
    location: Location,
) -> SpentTime {
    let cost = time_cost(config, location);

    if state.time_remaining < cost.total() {
        return SpentTime {
            travel: cost.travel,
            action: cost.action,
            success: false,
            turn_summary: None,
        };
    }

    state.time_remaining -= cost.total();
    state.current_location = location;

    let turn_summary = (state.time_remaining < config.new_day_threshold)
        .then(|| increment_turn(state, config));

    SpentTime {
        travel: cost.travel,
        action: cost.action,
        success: true,
        turn_summary,
    }
}

/// Roll the day over and apply the overnight effects.
///
/// Order of operations:
///
/// 1. Advance the turn counter
/// 2. Add overnight hunger -- without clamping; hunger may pass 100 here
/// 3. Charge rent when the player has a flat (money may go negative)
/// 4. Reset the time budget and put the player back home
pub fn increment_turn(state: &mut PlayerState, config: &GameConfig) -> TurnSummary {
    state.turn = state.turn.saturating_add(1);

    // The one uncapped hunger path: overnight growth.
    state.hunger = state.hunger.saturating_add(config.hunger_per_turn);

    let rent_charged = (state.rent > 0).then(|| {
        state.money = state.money.saturating_sub(state.rent);
        state.rent
    });

    state.time_remaining = config.minutes_per_day;
    state.current_location = Location::Home;

    TurnSummary {
        turn: state.turn,
        hunger_increase: config.hunger_per_turn,
        rent_charged,
    }
}

/// Fast-forward the rest of the day.
///
/// Burns enough minutes to cross the new-day threshold, then rolls the day
/// over. Returns the minutes passed along with the rollover summary.
pub fn pass_time(state: &mut PlayerState, config: &GameConfig) -> (u32, TurnSummary) {
    let minutes_passed = if state.time_remaining >= config.new_day_threshold {
        // Land one minute below the threshold.
        state.time_remaining - (config.new_day_threshold.saturating_sub(1))
    } else {
        // Already below the threshold; burn what is left.
        state.time_remaining
    };

    state.time_remaining -= minutes_passed;
    let summary = increment_turn(state, config);
    (minutes_passed, summary)
}

/// The wall-clock hour corresponding to a remaining time budget.
///
/// A full budget is the day-start hour; each spent hour advances the
/// clock, wrapping at midnight.
pub fn current_hour(config: &GameConfig, minutes_remaining: u32) -> u32 {
    let elapsed = config.minutes_per_day.saturating_sub(minutes_remaining);
    (config.day_start_hour + elapsed / 60) % 24
}

/// Format a remaining time budget as a wall-clock `HH:MM` string.
pub fn format_time(config: &GameConfig, minutes_remaining: u32) -> String {
    let elapsed = config.minutes_per_day.saturating_sub(minutes_remaining);
    let hour = (config.day_start_hour + elapsed / 60) % 24;
    let minute = elapsed % 60;
    format!("{hour:02}:{minute:02}")
}

/// Format a minute count as a compact duration (`"3h"`, `"1h 30m"`, `"45m"`).
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
