//! Shared application state for the HTTP server.
//!
//! [`AppState`] bundles the state store, the game configuration, and the
//! optional NPC client. It is wrapped in [`Arc`] and injected via Axum's
//! `State` extractor.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use ratrace_engine::GameConfig;
use ratrace_npc::NpcClient;

use crate::store::{MemoryStore, StateStore};

/// Shared state for the Axum application.
pub struct AppState {
    /// Player state persistence.
    pub store: Arc<dyn StateStore>,
    /// Game tuning, validated at startup.
    pub game: GameConfig,
    /// The NPC chat client; `None` when no LLM backend is configured,
    /// in which case `/api/chat` answers 503.
    pub npc: Option<Arc<NpcClient>>,
    /// Server start time, shown on the status page.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create application state over the given store and configuration,
    /// without NPC chat.
    pub fn new(store: Arc<dyn StateStore>, game: GameConfig) -> Self {
        Self {
            store,
            game,
            npc: None,
            started_at: Utc::now(),
        }
    }

    /// Create application state with an in-memory store and default
    /// tuning (tests, ephemeral servers).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), GameConfig::default())
    }

    /// Attach an NPC chat client.
    #[must_use]
    pub fn with_npc(mut self, npc: Arc<NpcClient>) -> Self {
        self.npc = Some(npc);
        self
    }
}
