//! The validated-visit wrapper: every check a location visit goes through.
//!
//! The sequence is fixed:
//!
//! 1. Opening-hours check (when enabled and the location keeps hours)
//! 2. Time-budget check
//! 3. Charge the time (may roll the day over)
//! 4. Run the rule; a failure keeps the time already spent but nothing else
//! 5. Optional post callback (look recompute after clothing purchases)
//! 6. Endgame check
//!
//! Action logging happens here too -- one `tracing` event per visit
//! instead of per-function instrumentation.

use tracing::info;

use ratrace_types::{Location, PlayerState, RuleOutcome, VisitOutcome};

use crate::clock;
use crate::config::GameConfig;
use crate::endgame;
use crate::locations;

/// Options controlling a validated visit.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisitOptions {
    /// Whether to enforce the location's opening hours.
    pub check_opening_hours: bool,
}

impl VisitOptions {
    /// Options with the opening-hours check enabled.
    pub const fn with_hours() -> Self {
        Self {
            check_opening_hours: true,
        }
    }
}

/// Run one location visit through the full validation sequence.
///
/// `rule` is the location's rule function; `post` runs after a successful
/// rule and before the endgame check (used to recompute the look level
/// after clothing purchases).
pub fn execute_with_validation(
    state: &mut PlayerState,
    config: &GameConfig,
    location: Location,
    options: VisitOptions,
    rule: impl FnOnce(&mut PlayerState) -> RuleOutcome,
    post: Option<fn(&mut PlayerState)>,
) -> VisitOutcome {
    // 1. Opening hours.
    if options.check_opening_hours
        && let Some((open, close)) = locations::opening_hours(location)
    {
        let hour = clock::current_hour(config, state.time_remaining);
        if hour < open || hour >= close {
            let message = format!(
                "{} is closed! Opening hours: {open:02}:00-{close:02}:00.",
                location.display_name()
            );
            info!(%location, turn = state.turn, "visit rejected: closed");
            return VisitOutcome::failure(message);
        }
    }

    // 2. Time budget.
    if !clock::has_enough_time(state, config, location) {
        let needed = clock::time_cost(config, location).total();
        let message = format!(
            "Not enough time left today! You need {} but only have {}.",
            clock::format_duration(needed),
            clock::format_duration(state.time_remaining)
        );
        info!(%location, turn = state.turn, "visit rejected: out of time");
        return VisitOutcome::failure(message);
    }

    // 3. Charge the time; this may roll the day over.
    let spent = clock::spend_time(state, config, location);
    let turn_summary = spent.turn_summary;

    // 4. The rule itself. On failure the time spent stands, nothing else
    //    happens, and the message passes through verbatim.
    let outcome = rule(state);
    if !outcome.success {
        info!(%location, turn = state.turn, message = %outcome.message, "action failed");
        return VisitOutcome {
            message: outcome.message,
            success: false,
            burnout: false,
            bankruptcy: false,
            turn_summary,
        };
    }

    // 5. Post callback.
    if let Some(post) = post {
        post(state);
    }

    // 6. Endgame.
    let check = endgame::check_endgame(state, config, outcome.message);
    info!(
        %location,
        turn = state.turn,
        burnout = check.burnout,
        bankruptcy = check.bankruptcy,
        "action executed"
    );

    VisitOutcome {
        message: check.message,
        success: true,
        burnout: check.burnout,
        bankruptcy: check.bankruptcy,
        turn_summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratrace_types::MINUTES_PER_DAY;

    use crate::locations::{john_lewis, workplace};

    #[test]
    fn closed_location_fails_without_spending_time() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        // 14 hours spent: 20:00, past the estate agent's closing time.
        state.time_remaining = MINUTES_PER_DAY - 14 * 60;
        let before = state.clone();
        let outcome = execute_with_validation(
            &mut state,
            &config,
            Location::EstateAgent,
            VisitOptions::with_hours(),
            |state| crate::locations::estate_agent::visit_estate_agent(state),
            None,
        );
        assert!(!outcome.success);
        assert!(outcome.message.contains("closed"));
        assert!(outcome.message.contains("06:00-20:00"));
        assert_eq!(state, before);
    }

    #[test]
    fn hours_are_ignored_when_the_check_is_off() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.time_remaining = MINUTES_PER_DAY - 14 * 60;
        let outcome = execute_with_validation(
            &mut state,
            &config,
            Location::EstateAgent,
            VisitOptions::default(),
            |state| crate::locations::estate_agent::visit_estate_agent(state),
            None,
        );
        assert!(outcome.success);
    }

    #[test]
    fn time_shortfall_fails_without_mutation() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.time_remaining = 90;
        let before = state.clone();
        let outcome = execute_with_validation(
            &mut state,
            &config,
            Location::Shop,
            VisitOptions::default(),
            |state| crate::locations::shop::visit_shop(state),
            None,
        );
        assert!(!outcome.success);
        assert!(outcome.message.contains("3h"));
        assert!(outcome.message.contains("1h 30m"));
        assert_eq!(state, before);
    }

    #[test]
    fn failed_rule_keeps_the_time_spent() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        let outcome = execute_with_validation(
            &mut state,
            &config,
            Location::Workplace,
            VisitOptions::default(),
            |state| workplace::visit_workplace(state, &config),
            None,
        );
        assert!(!outcome.success);
        assert_eq!(outcome.message, "You need to get a job first!");
        assert_eq!(state.time_remaining, MINUTES_PER_DAY - 180);
        assert_eq!(state.money, 100);
        assert!(!outcome.burnout);
        assert!(!outcome.bankruptcy);
    }

    #[test]
    fn post_callback_runs_after_a_successful_rule() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.money = 300;
        let outcome = execute_with_validation(
            &mut state,
            &config,
            Location::JohnLewis,
            VisitOptions::default(),
            |state| john_lewis::purchase_item(state, &config, "Formal Suit"),
            Some(john_lewis::recompute_look),
        );
        assert!(outcome.success);
        assert_eq!(state.look, 2);
    }

    #[test]
    fn rollover_effects_can_trigger_the_endgame() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.current_job = String::from("Janitor");
        state.job_wage = 20;
        state.tiredness = 85;
        state.hunger = 60;
        state.time_remaining = 190; // rollover: hunger 60 -> 85
        let outcome = execute_with_validation(
            &mut state,
            &config,
            Location::Workplace,
            VisitOptions::default(),
            |state| workplace::visit_workplace(state, &config),
            None,
        );
        assert!(outcome.success);
        assert!(outcome.burnout);
        assert_eq!(outcome.message, crate::endgame::BURNOUT_MESSAGE);
        assert!(outcome.turn_summary.is_some());
        // Reset back to the starting values, day counter kept.
        assert_eq!(state.tiredness, config.initial_tiredness);
        assert_eq!(state.turn, 2);
    }

    #[test]
    fn successful_visit_reports_the_rule_message() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.current_job = String::from("Janitor");
        state.job_wage = 20;
        let outcome = execute_with_validation(
            &mut state,
            &config,
            Location::Workplace,
            VisitOptions::default(),
            |state| workplace::visit_workplace(state, &config),
            None,
        );
        assert!(outcome.success);
        assert!(outcome.message.contains("worked a shift"));
        assert_eq!(state.money, 105);
    }
}
