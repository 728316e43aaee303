//! LLM-backed NPC chat for the Ratrace life simulation.
//!
//! Every location has an NPC (a professor, a clerk, a boss, ...) the
//! player can talk to. The NPC answers in character and can act on the
//! player's behalf by calling the game rules as schema-described tools:
//! one tool round is executed against the player state, then a follow-up
//! completion folds the results into the reply.
//!
//! # Modules
//!
//! - [`chat`] -- The [`NpcClient`] orchestrating prompt, tools, and memory
//! - [`config`] -- Backend configuration from environment variables
//! - [`error`] -- Error types for the chat pipeline ([`NpcError`])
//! - [`llm`] -- OpenAI-compatible and Anthropic backends (enum dispatch)
//! - [`prompts`] -- Persona templates rendered with `minijinja`
//! - [`tools`] -- The tool registry and dispatch into the engine rules

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompts;
pub mod tools;

// Re-export primary types at crate root for convenience.
pub use chat::{ChatOutcome, NpcClient};
pub use config::{BackendType, NpcConfig};
pub use error::NpcError;
pub use tools::{execute_tool, tools_for_location, ToolResult, ToolSpec};
