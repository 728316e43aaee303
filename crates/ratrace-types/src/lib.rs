//! Shared type definitions for the Ratrace life simulation.
//!
//! This crate is the single source of truth for the data shapes used across
//! the Ratrace workspace: the per-player state document, the location enum,
//! the outcome types returned by game rules, and the human-readable stat
//! labels shown in the UI.
//!
//! # Modules
//!
//! - [`enums`] -- Location and chat-role enumerations
//! - [`labels`] -- Human-readable tier labels for player stats
//! - [`outcome`] -- Rule and visit outcome types, turn summaries
//! - [`state`] -- The [`PlayerState`] aggregate and its invariant-preserving helpers

pub mod enums;
pub mod labels;
pub mod outcome;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use enums::{ChatRole, Location};
pub use labels::{happiness_label, hunger_label, look_label, tiredness_label};
pub use outcome::{RuleOutcome, TurnSummary, VisitOutcome};
pub use state::{
    ChatEntry, PlayerState, DEFAULT_HAPPINESS, DEFAULT_HUNGER, DEFAULT_MONEY, DEFAULT_TIREDNESS,
    MAX_CONVERSATION_ENTRIES, MINUTES_PER_DAY, STATE_VERSION, UNEMPLOYED,
};
