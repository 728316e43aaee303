//! LLM backend abstraction and implementations.
//!
//! Defines an enum-based dispatch for LLM backends, avoiding the
//! dyn-compatibility issues with async trait methods. Concrete
//! implementations exist for OpenAI-compatible APIs and the Anthropic
//! Messages API. All backends communicate over HTTP via `reqwest`.
//!
//! Both backends speak the same two-step protocol: [`LlmBackend::converse`]
//! sends the persona, the location's conversation history, the player's
//! message, and the location's tools; when the model calls tools,
//! [`LlmBackend::follow_up`] sends the executed results back for the final
//! in-character reply.

use serde_json::{json, Value};

use ratrace_types::{ChatEntry, ChatRole};

use crate::config::{BackendType, NpcConfig};
use crate::error::NpcError;
use crate::tools::{ToolResult, ToolSpec};

/// One tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    /// Backend-assigned call id, echoed back with the result.
    pub id: String,
    /// Name of the tool to invoke.
    pub name: String,
    /// Parsed tool arguments.
    pub arguments: Value,
}

/// The model's reply to a conversation turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmReply {
    /// Text content (may be empty when the model only called tools).
    pub text: String,
    /// Tool invocations requested by the model.
    pub tool_calls: Vec<ToolCall>,
}

/// Everything a backend needs to run one conversation turn.
#[derive(Debug, Clone, Copy)]
pub struct ChatTurn<'a> {
    /// The rendered system prompt (persona + player status).
    pub system: &'a str,
    /// Prior exchanges at this location, oldest first.
    pub history: &'a [ChatEntry],
    /// The player's new message.
    pub user_message: &'a str,
    /// Tools available in this location's context.
    pub tools: &'a [ToolSpec],
}

// ---------------------------------------------------------------------------
// Unified backend enum (dyn-compatible alternative to async trait)
// ---------------------------------------------------------------------------

/// An LLM backend that can run NPC conversation turns.
///
/// Uses enum dispatch instead of trait objects because async methods
/// are not dyn-compatible in Rust.
pub enum LlmBackend {
    /// OpenAI-compatible chat completions API.
    OpenAi(OpenAiBackend),
    /// Anthropic Messages API.
    Anthropic(AnthropicBackend),
}

impl LlmBackend {
    /// Create a backend from configuration.
    pub fn from_config(config: &NpcConfig) -> Self {
        match config.backend_type {
            BackendType::OpenAi => Self::OpenAi(OpenAiBackend::new(config)),
            BackendType::Anthropic => Self::Anthropic(AnthropicBackend::new(config)),
        }
    }

    /// Run one conversation turn, offering the location's tools.
    ///
    /// # Errors
    ///
    /// Returns [`NpcError::Backend`] if the HTTP call fails or the response
    /// cannot be extracted.
    pub async fn converse(&self, turn: ChatTurn<'_>) -> Result<LlmReply, NpcError> {
        match self {
            Self::OpenAi(backend) => backend.converse(turn).await,
            Self::Anthropic(backend) => backend.converse(turn).await,
        }
    }

    /// Send executed tool results back for the final in-character reply.
    ///
    /// # Errors
    ///
    /// Returns [`NpcError::Backend`] if the HTTP call fails or the response
    /// cannot be extracted.
    pub async fn follow_up(
        &self,
        turn: ChatTurn<'_>,
        first: &LlmReply,
        results: &[(ToolCall, ToolResult)],
    ) -> Result<String, NpcError> {
        match self {
            Self::OpenAi(backend) => backend.follow_up(turn, first, results).await,
            Self::Anthropic(backend) => backend.follow_up(turn, first, results).await,
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenAi(_) => "openai-compatible",
            Self::Anthropic(_) => "anthropic",
        }
    }
}

/// The conversation history as wire messages shared by both backends.
fn history_messages(history: &[ChatEntry]) -> Vec<Value> {
    history
        .iter()
        .map(|entry| {
            let role = match entry.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "assistant",
            };
            json!({ "role": role, "content": entry.content })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// OpenAI-compatible backend
// ---------------------------------------------------------------------------

/// Backend for OpenAI-compatible chat completions APIs.
///
/// Sends requests to `{api_url}/chat/completions` with tools in the
/// function-calling format.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiBackend {
    /// Create a new OpenAI-compatible backend.
    pub fn new(config: &NpcConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// The base message array: system, history, then the new message.
    fn base_messages(turn: ChatTurn<'_>) -> Vec<Value> {
        let mut messages = vec![json!({ "role": "system", "content": turn.system })];
        messages.extend(history_messages(turn.history));
        messages.push(json!({ "role": "user", "content": turn.user_message }));
        messages
    }

    async fn converse(&self, turn: ChatTurn<'_>) -> Result<LlmReply, NpcError> {
        let mut body = json!({
            "model": self.model,
            "messages": Self::base_messages(turn),
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });
        if !turn.tools.is_empty() {
            body["tools"] = Value::Array(turn.tools.iter().map(openai_tool).collect());
        }

        let response = self.post(&body).await?;
        extract_openai_reply(&response)
    }

    async fn follow_up(
        &self,
        turn: ChatTurn<'_>,
        first: &LlmReply,
        results: &[(ToolCall, ToolResult)],
    ) -> Result<String, NpcError> {
        let mut messages = Self::base_messages(turn);
        messages.push(openai_assistant_message(first));
        for (call, result) in results {
            messages.push(json!({
                "role": "tool",
                "tool_call_id": call.id,
                "content": result.message,
            }));
        }

        let body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        let response = self.post(&body).await?;
        let reply = extract_openai_reply(&response)?;
        Ok(reply.text)
    }

    async fn post(&self, body: &Value) -> Result<Value, NpcError> {
        let url = format!("{}/chat/completions", self.api_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| NpcError::Backend(format!("OpenAI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(NpcError::Backend(format!(
                "OpenAI returned {status}: {error_body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| NpcError::Backend(format!("OpenAI response parse failed: {e}")))
    }
}

/// A tool spec in the OpenAI function-calling format.
fn openai_tool(tool: &ToolSpec) -> Value {
    json!({
        "type": "function",
        "function": {
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.input_schema,
        }
    })
}

/// Reconstruct the assistant message that carried the tool calls.
fn openai_assistant_message(reply: &LlmReply) -> Value {
    let tool_calls: Vec<Value> = reply
        .tool_calls
        .iter()
        .map(|call| {
            json!({
                "id": call.id,
                "type": "function",
                "function": {
                    "name": call.name,
                    "arguments": call.arguments.to_string(),
                }
            })
        })
        .collect();

    let content = if reply.text.is_empty() {
        Value::Null
    } else {
        Value::from(reply.text.clone())
    };

    json!({ "role": "assistant", "content": content, "tool_calls": tool_calls })
}

/// Extract text and tool calls from an OpenAI chat completions response.
fn extract_openai_reply(response: &Value) -> Result<LlmReply, NpcError> {
    let message = response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .ok_or_else(|| {
            NpcError::Backend("OpenAI response missing choices[0].message".to_owned())
        })?;

    let text = message
        .get("content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let tool_calls = message
        .get("tool_calls")
        .and_then(Value::as_array)
        .map(|calls| {
            calls
                .iter()
                .filter_map(|call| {
                    let id = call.get("id")?.as_str()?.to_owned();
                    let function = call.get("function")?;
                    let name = function.get("name")?.as_str()?.to_owned();
                    let arguments = function
                        .get("arguments")
                        .and_then(Value::as_str)
                        .and_then(|raw| serde_json::from_str(raw).ok())
                        .unwrap_or_else(|| json!({}));
                    Some(ToolCall {
                        id,
                        name,
                        arguments,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(LlmReply { text, tool_calls })
}

// ---------------------------------------------------------------------------
// Anthropic Messages API backend
// ---------------------------------------------------------------------------

/// Backend for the Anthropic Messages API.
///
/// Anthropic differs from OpenAI:
/// - Uses `x-api-key` header instead of `Authorization: Bearer`
/// - The system prompt is a top-level field, not a message
/// - Tool calls arrive as `tool_use` content blocks, and results go back
///   as `tool_result` blocks inside a user message
pub struct AnthropicBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnthropicBackend {
    /// Create a new Anthropic Messages API backend.
    pub fn new(config: &NpcConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// The base message array: history, then the new message.
    fn base_messages(turn: ChatTurn<'_>) -> Vec<Value> {
        let mut messages = history_messages(turn.history);
        messages.push(json!({ "role": "user", "content": turn.user_message }));
        messages
    }

    async fn converse(&self, turn: ChatTurn<'_>) -> Result<LlmReply, NpcError> {
        let mut body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "system": turn.system,
            "messages": Self::base_messages(turn),
        });
        if !turn.tools.is_empty() {
            body["tools"] = Value::Array(turn.tools.iter().map(anthropic_tool).collect());
        }

        let response = self.post(&body).await?;
        extract_anthropic_reply(&response)
    }

    async fn follow_up(
        &self,
        turn: ChatTurn<'_>,
        first: &LlmReply,
        results: &[(ToolCall, ToolResult)],
    ) -> Result<String, NpcError> {
        let mut messages = Self::base_messages(turn);
        messages.push(json!({
            "role": "assistant",
            "content": anthropic_assistant_blocks(first),
        }));

        let result_blocks: Vec<Value> = results
            .iter()
            .map(|(call, result)| {
                json!({
                    "type": "tool_result",
                    "tool_use_id": call.id,
                    "content": result.message,
                })
            })
            .collect();
        messages.push(json!({ "role": "user", "content": result_blocks }));

        let body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "system": turn.system,
            "messages": messages,
        });

        let response = self.post(&body).await?;
        let reply = extract_anthropic_reply(&response)?;
        Ok(reply.text)
    }

    async fn post(&self, body: &Value) -> Result<Value, NpcError> {
        let url = format!("{}/messages", self.api_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| NpcError::Backend(format!("Anthropic request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(NpcError::Backend(format!(
                "Anthropic returned {status}: {error_body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| NpcError::Backend(format!("Anthropic response parse failed: {e}")))
    }
}

/// A tool spec in the Anthropic tools format.
fn anthropic_tool(tool: &ToolSpec) -> Value {
    json!({
        "name": tool.name,
        "description": tool.description,
        "input_schema": tool.input_schema,
    })
}

/// Reconstruct the assistant content blocks that carried the tool calls.
fn anthropic_assistant_blocks(reply: &LlmReply) -> Vec<Value> {
    let mut blocks = Vec::new();
    if !reply.text.is_empty() {
        blocks.push(json!({ "type": "text", "text": reply.text }));
    }
    for call in &reply.tool_calls {
        blocks.push(json!({
            "type": "tool_use",
            "id": call.id,
            "name": call.name,
            "input": call.arguments,
        }));
    }
    blocks
}

/// Extract text and tool calls from an Anthropic Messages API response.
fn extract_anthropic_reply(response: &Value) -> Result<LlmReply, NpcError> {
    let content = response
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| NpcError::Backend("Anthropic response missing content".to_owned()))?;

    let mut text = String::new();
    let mut tool_calls = Vec::new();

    for block in content {
        match block.get("type").and_then(Value::as_str) {
            Some("text") => {
                if let Some(piece) = block.get("text").and_then(Value::as_str) {
                    text.push_str(piece);
                }
            }
            Some("tool_use") => {
                let id = block
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned();
                let name = block
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned();
                let arguments = block.get("input").cloned().unwrap_or_else(|| json!({}));
                tool_calls.push(ToolCall {
                    id,
                    name,
                    arguments,
                });
            }
            _ => {}
        }
    }

    Ok(LlmReply { text, tool_calls })
}
