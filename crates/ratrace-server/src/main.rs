//! Game server entry point for the Ratrace life simulation.
//!
//! Wires the pieces together: tuning from an optional YAML file, player
//! persistence (JSON file or in-memory), the optional LLM-backed NPC
//! chat, and the Axum HTTP server.
//!
//! # Environment
//!
//! - `RATRACE_CONFIG` -- path to a game tuning YAML file (optional)
//! - `RATRACE_DATA` -- path to the player state JSON file (optional;
//!   in-memory when unset)
//! - `RATRACE_HOST` / `RATRACE_PORT` -- bind address (default `0.0.0.0:5001`)
//! - `LLM_PROVIDER` + provider API key -- enables NPC chat (see
//!   `ratrace-npc`)

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ratrace_engine::GameConfig;
use ratrace_npc::NpcClient;
use ratrace_server::{
    start_server, AppState, JsonFileStore, MemoryStore, ServerConfig, StateStore,
};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the store cannot be
/// opened, or the server fails to bind.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("ratrace-server starting");

    // Game tuning: YAML file when configured, defaults otherwise.
    let game = match std::env::var("RATRACE_CONFIG") {
        Ok(path) => {
            let config = GameConfig::from_file(Path::new(&path))?;
            info!(config_path = path, "game configuration loaded");
            config
        }
        Err(_) => GameConfig::default(),
    };

    // Player persistence: JSON file when configured, in-memory otherwise.
    let store: Arc<dyn StateStore> = match std::env::var("RATRACE_DATA") {
        Ok(path) => {
            let store = JsonFileStore::open(&path)?;
            info!(data_path = path, "player store opened");
            Arc::new(store)
        }
        Err(_) => {
            info!("no RATRACE_DATA set, using in-memory player store");
            Arc::new(MemoryStore::new())
        }
    };

    // NPC chat is optional: without a configured backend the chat route
    // answers 503 and everything else works.
    let mut app = AppState::new(store, game);
    match NpcClient::from_env() {
        Ok(npc) => {
            info!(backend = npc.backend_name(), "NPC chat enabled");
            app = app.with_npc(Arc::new(npc));
        }
        Err(e) => {
            warn!(reason = %e, "NPC chat disabled");
        }
    }

    let server_config = ServerConfig {
        host: std::env::var("RATRACE_HOST").unwrap_or_else(|_| "0.0.0.0".to_owned()),
        port: std::env::var("RATRACE_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(5001),
    };

    start_server(&server_config, Arc::new(app)).await?;

    Ok(())
}
