//! Burnout and bankruptcy detection, and the fresh-start reset.
//!
//! Neither condition is an error: both are state-machine transitions that
//! wipe the player's progress back to the starting values while keeping
//! the day counter running.

use ratrace_types::PlayerState;

use crate::config::GameConfig;

/// Sentinel message signalling a burnout reset to the UI.
pub const BURNOUT_MESSAGE: &str = "BURNOUT";

/// Sentinel message signalling a bankruptcy reset to the UI.
pub const BANKRUPTCY_MESSAGE: &str = "BANKRUPTCY";

/// Result of the post-visit endgame check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndgameCheck {
    /// Whether a burnout reset fired.
    pub burnout: bool,
    /// Whether a bankruptcy reset fired.
    pub bankruptcy: bool,
    /// The message to surface: the sentinel when a reset fired, the
    /// original visit message otherwise.
    pub message: String,
}

/// Whether the player has burned out: exhausted *and* starving at once.
pub const fn is_burned_out(state: &PlayerState, config: &GameConfig) -> bool {
    state.tiredness >= config.burnout_threshold && state.hunger >= config.burnout_threshold
}

/// Whether the player is bankrupt.
pub const fn is_bankrupt(state: &PlayerState) -> bool {
    state.money < 0
}

/// Create a fresh player state from the configured starting values.
pub fn new_player(config: &GameConfig) -> PlayerState {
    let mut state = PlayerState::new();
    state.money = config.initial_money;
    state.happiness = config.initial_happiness;
    state.tiredness = config.initial_tiredness;
    state.hunger = config.initial_hunger;
    state.time_remaining = config.minutes_per_day;
    state
}

/// Wipe the state back to the starting values, keeping only the day
/// counter as a running total across resets.
pub fn reset(state: &mut PlayerState, config: &GameConfig) {
    let turn = state.turn;
    *state = new_player(config);
    state.turn = turn;
}

/// Run the endgame check after a visit, resetting the state when a
/// condition fires.
///
/// Burnout is checked first; when it fires the state is reset and the
/// message becomes [`BURNOUT_MESSAGE`]. Bankruptcy is then checked against
/// the *current* (possibly just reset) state -- so after a burnout reset
/// it cannot fire, since the reset restores a non-negative balance. That
/// precedence is deliberate and load-bearing; keep the order.
pub fn check_endgame(
    state: &mut PlayerState,
    config: &GameConfig,
    message: String,
) -> EndgameCheck {
    let mut message = message;

    let burnout = is_burned_out(state, config);
    if burnout {
        reset(state, config);
        message = BURNOUT_MESSAGE.to_owned();
    }

    let bankruptcy = is_bankrupt(state);
    if bankruptcy {
        reset(state, config);
        message = BANKRUPTCY_MESSAGE.to_owned();
    }

    EndgameCheck {
        burnout,
        bankruptcy,
        message,
    }
}
