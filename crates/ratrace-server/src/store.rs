//! Player state persistence.
//!
//! The engine treats state as an opaque document passed in and returned;
//! this module is the collaborator that keeps those documents. Two
//! implementations exist: an in-memory store (tests, ephemeral servers)
//! and a single-file JSON store that persists the whole player map on
//! every save.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use ratrace_types::PlayerState;

/// Errors that can occur in the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read or write the backing file.
    #[error("store I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to serialize or deserialize the player map.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A keyed store of player state documents.
///
/// Implementations must be safe to share across request handlers.
pub trait StateStore: Send + Sync {
    /// Load a player's state, if one has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage fails.
    fn load(&self, player: &str) -> Result<Option<PlayerState>, StoreError>;

    /// Save a player's state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage fails.
    fn save(&self, player: &str, state: &PlayerState) -> Result<(), StoreError>;

    /// All player ids with saved state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage fails.
    fn players(&self) -> Result<Vec<String>, StoreError>;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// In-memory store backed by a [`BTreeMap`]. State dies with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    states: RwLock<BTreeMap<String, PlayerState>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, player: &str) -> Result<Option<PlayerState>, StoreError> {
        let states = self
            .states
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(states.get(player).cloned())
    }

    fn save(&self, player: &str, state: &PlayerState) -> Result<(), StoreError> {
        let mut states = self
            .states
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        states.insert(player.to_owned(), state.clone());
        Ok(())
    }

    fn players(&self) -> Result<Vec<String>, StoreError> {
        let states = self
            .states
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(states.keys().cloned().collect())
    }
}

// ---------------------------------------------------------------------------
// JSON file store
// ---------------------------------------------------------------------------

/// File-backed store keeping every player in one JSON document.
///
/// The whole map is rewritten on each save -- fine for the handful of
/// players a single game server holds.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    states: RwLock<BTreeMap<String, PlayerState>>,
}

impl JsonFileStore {
    /// Open a store at the given path, loading any existing player map.
    /// A missing file starts empty and is created on the first save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if an existing file cannot be read or
    /// parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let states = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::from(e)),
        };
        Ok(Self {
            path,
            states: RwLock::new(states),
        })
    }

    /// Write the current player map to disk.
    fn flush(&self, states: &BTreeMap<String, PlayerState>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(states)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, player: &str) -> Result<Option<PlayerState>, StoreError> {
        let states = self
            .states
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(states.get(player).cloned())
    }

    fn save(&self, player: &str, state: &PlayerState) -> Result<(), StoreError> {
        let mut states = self
            .states
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        states.insert(player.to_owned(), state.clone());
        self.flush(&states)
    }

    fn players(&self) -> Result<Vec<String>, StoreError> {
        let states = self
            .states
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(states.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load("ada").unwrap_or(None).is_none());

        let mut state = PlayerState::new();
        state.money = 250;
        assert!(store.save("ada", &state).is_ok());

        let loaded = store.load("ada").unwrap_or(None);
        assert_eq!(loaded.map(|s| s.money), Some(250));
        assert_eq!(store.players().unwrap_or_default(), vec!["ada".to_owned()]);
    }

    #[test]
    fn json_file_store_persists_across_opens() {
        let unique = format!(
            "ratrace_store_test_{}_{:?}.json",
            std::process::id(),
            std::thread::current().id(),
        );
        let path = std::env::temp_dir().join(unique);
        let _ = std::fs::remove_file(&path);

        {
            let Ok(store) = JsonFileStore::open(&path) else {
                panic!("open should succeed on a missing file");
            };
            let mut state = PlayerState::new();
            state.turn = 7;
            assert!(store.save("grace", &state).is_ok());
        }

        let Ok(reopened) = JsonFileStore::open(&path) else {
            panic!("reopen should succeed");
        };
        let loaded = reopened.load("grace").unwrap_or(None);
        assert_eq!(loaded.map(|s| s.turn), Some(7));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn json_file_store_rejects_corrupt_files() {
        let unique = format!(
            "ratrace_store_corrupt_{}_{:?}.json",
            std::process::id(),
            std::thread::current().id(),
        );
        let path = std::env::temp_dir().join(unique);
        std::fs::write(&path, "not json").unwrap_or(());

        assert!(JsonFileStore::open(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }
}
