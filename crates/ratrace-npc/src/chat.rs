//! NPC chat orchestration.
//!
//! [`NpcClient`] ties the pieces together: render the persona prompt,
//! offer the location's tools, execute at most one tool round against the
//! player state, fold the results into the final reply, and record the
//! exchange in the location's conversation memory.

use tracing::{debug, info};

use ratrace_engine::GameConfig;
use ratrace_types::{Location, PlayerState};

use crate::config::NpcConfig;
use crate::error::NpcError;
use crate::llm::{ChatTurn, LlmBackend};
use crate::prompts::PromptEngine;
use crate::tools::{execute_tool, tools_for_location, ToolResult};

/// Result of one chat exchange with an NPC.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// The NPC's in-character reply.
    pub response: String,
    /// Results of any tools the NPC invoked, in call order.
    pub tool_results: Vec<ToolResult>,
    /// Whether any tool successfully mutated the player state.
    pub state_updated: bool,
}

/// The NPC chat client: one per server, shared across players.
pub struct NpcClient {
    backend: LlmBackend,
    prompts: PromptEngine,
}

impl NpcClient {
    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NpcError::Template`] if the embedded persona templates
    /// fail to compile.
    pub fn new(config: &NpcConfig) -> Result<Self, NpcError> {
        Ok(Self {
            backend: LlmBackend::from_config(config),
            prompts: PromptEngine::new()?,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`NpcError::Config`] when no usable backend is configured.
    pub fn from_env() -> Result<Self, NpcError> {
        let config = NpcConfig::from_env()?;
        Self::new(&config)
    }

    /// Name of the active backend, for logging.
    pub const fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Run one chat exchange with the NPC at a location.
    ///
    /// Mutates the player state when the NPC invokes tools, and always
    /// records the exchange in the location's conversation history
    /// (capped to the most recent entries).
    ///
    /// # Errors
    ///
    /// Returns [`NpcError::Backend`] / [`NpcError::Template`] on pipeline
    /// failures. Tool failures are not errors -- they are reported in
    /// [`ChatOutcome::tool_results`].
    pub async fn chat(
        &self,
        location: Location,
        message: &str,
        state: &mut PlayerState,
        game: &GameConfig,
    ) -> Result<ChatOutcome, NpcError> {
        let system = self.prompts.system_prompt(location, state)?;
        let tools = tools_for_location(location);
        let history = state.conversation_at(location).to_vec();

        let turn = ChatTurn {
            system: &system,
            history: &history,
            user_message: message,
            tools: &tools,
        };

        debug!(%location, backend = self.backend.name(), "sending chat turn");
        let reply = self.backend.converse(turn).await?;

        let (response, tool_results, state_updated) = if reply.tool_calls.is_empty() {
            (reply.text.clone(), Vec::new(), false)
        } else {
            let mut executed = Vec::with_capacity(reply.tool_calls.len());
            let mut state_updated = false;
            for call in &reply.tool_calls {
                let result = execute_tool(&call.name, &call.arguments, state, game);
                info!(
                    %location,
                    tool = %call.name,
                    success = result.success,
                    "NPC tool call"
                );
                state_updated = state_updated || result.success;
                executed.push((call.clone(), result));
            }

            let final_text = self.backend.follow_up(turn, &reply, &executed).await?;
            let results = executed.into_iter().map(|(_, result)| result).collect();
            (final_text, results, state_updated)
        };

        state.record_conversation(location, message, &response);

        Ok(ChatOutcome {
            response,
            tool_results,
            state_updated,
        })
    }
}
