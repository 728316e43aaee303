//! Outcome types for game rules and validated location visits.
//!
//! Rule functions never panic and never return errors: every failure mode
//! (insufficient funds, missing prerequisite, unknown item, ...) is a
//! [`RuleOutcome`] with `success = false` and a player-facing message.

use serde::{Deserialize, Serialize};

/// Result of a single rule function applied to the player state.
///
/// On failure the state is left untouched by the rule; on success the
/// message describes what changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Player-facing description of what happened (or why it did not).
    pub message: String,
    /// Whether the rule applied its effects.
    pub success: bool,
}

impl RuleOutcome {
    /// A successful outcome with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// A failed outcome with the given message. The caller must not have
    /// mutated the state.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// Summary of the automatic changes applied when a day rolls over.
///
/// Only non-zero changes are listed by [`TurnSummary::lines`]; the UI shows
/// these as the "overnight" report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    /// The day counter after the rollover.
    pub turn: u32,
    /// Hunger added overnight (uncapped).
    pub hunger_increase: u32,
    /// Rent charged overnight, when the player has a flat.
    pub rent_charged: Option<i64>,
}

impl TurnSummary {
    /// Player-facing lines for each non-zero overnight change.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Day {} begins.", self.turn)];
        if self.hunger_increase > 0 {
            lines.push(format!("You woke up hungrier (+{}).", self.hunger_increase));
        }
        if let Some(rent) = self.rent_charged {
            lines.push(format!("Rent charged: £{rent}."));
        }
        lines
    }
}

/// Result of a fully validated location visit.
///
/// Produced by the validation wrapper after the opening-hours check, the
/// time-budget check, the rule itself, and the endgame check have run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitOutcome {
    /// Player-facing message. `"BURNOUT"` / `"BANKRUPTCY"` are sentinel
    /// values signalling an endgame reset.
    pub message: String,
    /// Whether the visit succeeded.
    pub success: bool,
    /// Whether the visit ended in a burnout reset.
    pub burnout: bool,
    /// Whether the visit ended in a bankruptcy reset.
    pub bankruptcy: bool,
    /// Present when the visit caused a day rollover.
    pub turn_summary: Option<TurnSummary>,
}

impl VisitOutcome {
    /// A failed visit with no endgame flags and no rollover.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            burnout: false,
            bankruptcy: false,
            turn_summary: None,
        }
    }
}
