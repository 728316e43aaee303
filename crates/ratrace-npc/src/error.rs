//! Error types for the NPC chat pipeline.
//!
//! Uses `thiserror` for typed errors that surface through the whole
//! pipeline: configuration, template rendering, backend HTTP calls, and
//! response handling. Tool failures are not errors -- they come back as
//! unsuccessful [`ToolResult`](crate::tools::ToolResult)s.

/// Errors that can occur while serving an NPC chat turn.
#[derive(Debug, thiserror::Error)]
pub enum NpcError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to render a persona template.
    #[error("template render error: {0}")]
    Template(String),

    /// An LLM backend returned an error or was unreachable.
    #[error("LLM backend error: {0}")]
    Backend(String),

    /// Serialization or deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
