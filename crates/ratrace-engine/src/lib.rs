//! Game rules for the Ratrace life simulation.
//!
//! This crate is the logic layer: everything that mutates a
//! [`PlayerState`](ratrace_types::PlayerState) without touching I/O. It
//! sits between `ratrace-types` (data shapes) and the server/NPC crates
//! (HTTP and LLM orchestration).
//!
//! # Modules
//!
//! - [`clock`] -- The day clock: time costs, spending time, day rollover
//! - [`config`] -- Tunable game parameters ([`GameConfig`]), YAML-loadable
//! - [`endgame`] -- Burnout and bankruptcy detection and the state reset
//! - [`locations`] -- One rule module per location, plus opening hours
//! - [`migrate`] -- Load-time upgrade of persisted state documents
//! - [`validation`] -- The validated-visit wrapper sequencing every check

pub mod clock;
pub mod config;
pub mod endgame;
pub mod locations;
pub mod migrate;
pub mod validation;

// Re-export primary types at crate root for convenience.
pub use clock::{SpentTime, TimeCost};
pub use config::{ConfigError, GameConfig};
pub use endgame::{new_player, EndgameCheck, BANKRUPTCY_MESSAGE, BURNOUT_MESSAGE};
pub use migrate::upgrade_state;
pub use validation::{execute_with_validation, VisitOptions};
