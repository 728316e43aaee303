//! Workplace rules: working one shift.
//!
//! A visit is one two-hour shift, paying a quarter of the nominal
//! full-day wage (integer division) and adding the configured tiredness.

use ratrace_types::{PlayerState, RuleOutcome};

use crate::config::GameConfig;

/// Work one shift at the current job.
pub fn visit_workplace(state: &mut PlayerState, config: &GameConfig) -> RuleOutcome {
    if !state.is_employed() {
        return RuleOutcome::failure("You need to get a job first!");
    }

    let earnings = state.job_wage / 4;
    state.add_money(earnings);
    state.update_tiredness(i64::from(config.work_tiredness));

    RuleOutcome::success(format!(
        "You worked a shift as {} and earned £{earnings}!",
        state.current_job
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unemployed_player_cannot_work() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.money = 100;
        state.hunger = 0;
        state.tiredness = 0;
        let outcome = visit_workplace(&mut state, &config);
        assert!(!outcome.success);
        assert_eq!(outcome.message, "You need to get a job first!");
        assert_eq!(state, PlayerState::new());
    }

    #[test]
    fn shift_pays_a_quarter_of_the_daily_wage() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.current_job = String::from("Office Worker");
        state.job_wage = 60;
        let outcome = visit_workplace(&mut state, &config);
        assert!(outcome.success);
        assert_eq!(state.money, 115);
        assert!(outcome.message.contains("£15"));
    }

    #[test]
    fn shift_pay_uses_integer_division() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.current_job = String::from("Janitor");
        state.job_wage = 35;
        let _ = visit_workplace(&mut state, &config);
        assert_eq!(state.money, 108); // 35 / 4 = 8
    }

    #[test]
    fn working_tires_the_player_out() {
        let config = GameConfig::default();
        let mut state = PlayerState::new();
        state.current_job = String::from("Janitor");
        state.job_wage = 20;
        state.tiredness = 95;
        let _ = visit_workplace(&mut state, &config);
        assert_eq!(state.tiredness, 100); // clamped
    }
}
