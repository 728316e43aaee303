//! HTTP API server for the Ratrace life simulation.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Game routes**: the player state document, time information, the
//!   generic location action, and the fast-forward to the next day
//! - **Location routes**: catalogue listings plus the parameterized
//!   purchase/enroll/apply/rent actions, all run through the engine's
//!   validated-visit wrapper
//! - **NPC chat** (`POST /api/chat`): LLM-backed conversations that can
//!   invoke the game rules as tools
//! - **Minimal HTML status page** (`GET /`) with uptime, player count,
//!   and the endpoint listing
//!
//! # Architecture
//!
//! Request handlers load the caller's state from the [`StateStore`],
//! mutate it through `ratrace-engine`, and save it back before
//! responding. The store serializes per-call; one in-flight action per
//! player is the collaborating client's responsibility.
//!
//! [`StateStore`]: store::StateStore

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod store;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
pub use store::{JsonFileStore, MemoryStore, StateStore, StoreError};
