//! NPC backend configuration from environment variables.
//!
//! The chat feature is optional: when no API key is configured the server
//! simply runs without it. Configuration therefore loads lazily and fails
//! with a descriptive [`NpcError::Config`] instead of panicking.

use crate::error::NpcError;

/// Supported LLM backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// OpenAI-compatible chat completions API.
    OpenAi,
    /// Anthropic Messages API (different request format).
    Anthropic,
}

/// Complete NPC chat configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct NpcConfig {
    /// Which wire protocol to speak.
    pub backend_type: BackendType,
    /// Base API URL (e.g. `https://api.openai.com/v1`).
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Maximum tokens per NPC reply.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl NpcConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `LLM_PROVIDER` -- `openai` (default) or `anthropic`
    /// - `OPENAI_API_KEY` / `ANTHROPIC_API_KEY` -- key for the chosen provider
    /// - `LLM_API_URL` -- base URL override (defaults per provider)
    /// - `LLM_MODEL` -- model override (defaults per provider)
    /// - `LLM_MAX_TOKENS` -- reply token budget (default 300)
    /// - `LLM_TEMPERATURE` -- sampling temperature (default 0.7)
    ///
    /// # Errors
    ///
    /// Returns [`NpcError::Config`] when the provider is unknown, the
    /// matching API key is missing, or a numeric override fails to parse.
    pub fn from_env() -> Result<Self, NpcError> {
        let provider = std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_owned());

        let (backend_type, key_var, default_url, default_model) =
            match provider.to_lowercase().as_str() {
                "openai" => (
                    BackendType::OpenAi,
                    "OPENAI_API_KEY",
                    "https://api.openai.com/v1",
                    "gpt-4o-mini",
                ),
                "anthropic" | "claude" => (
                    BackendType::Anthropic,
                    "ANTHROPIC_API_KEY",
                    "https://api.anthropic.com/v1",
                    "claude-3-5-sonnet-latest",
                ),
                other => {
                    return Err(NpcError::Config(format!("unknown LLM provider: {other}")))
                }
            };

        let api_key = std::env::var(key_var)
            .map_err(|_| NpcError::Config(format!("{key_var} is not configured")))?;
        if api_key.is_empty() {
            return Err(NpcError::Config(format!("{key_var} is empty")));
        }

        let api_url = std::env::var("LLM_API_URL").unwrap_or_else(|_| default_url.to_owned());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| default_model.to_owned());

        let max_tokens: u32 = std::env::var("LLM_MAX_TOKENS")
            .unwrap_or_else(|_| "300".to_owned())
            .parse()
            .map_err(|e| NpcError::Config(format!("invalid LLM_MAX_TOKENS: {e}")))?;

        let temperature: f32 = std::env::var("LLM_TEMPERATURE")
            .unwrap_or_else(|_| "0.7".to_owned())
            .parse()
            .map_err(|e| NpcError::Config(format!("invalid LLM_TEMPERATURE: {e}")))?;

        Ok(Self {
            backend_type,
            api_url,
            api_key,
            model,
            max_tokens,
            temperature,
        })
    }
}
