use std::io;

use thiserror::Error;

use super::snapshot::{parse_config_record, parse_game_snapshot, GameSnapshot};
use crate::domain::Configuration;

/// Errors that can occur while writing a snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load/save interface the game session persists through.
///
/// Loads never fail: missing or malformed data comes back as `None`.
pub trait SnapshotStore {
    fn load_game(&self) -> Option<GameSnapshot>;
    fn save_game(&mut self, snapshot: &GameSnapshot) -> Result<(), PersistError>;
    fn load_config(&self) -> Option<Configuration>;
    fn save_config(&mut self, config: &Configuration) -> Result<(), PersistError>;
    /// Forget the saved game; the configuration record is kept.
    fn clear_game(&mut self) -> Result<(), PersistError>;
}

/// In-memory store holding the serialized JSON, as a file store would.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    game: Option<String>,
    config: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw game JSON (possibly malformed).
    pub fn with_game_json(mut self, json: impl Into<String>) -> Self {
        self.game = Some(json.into());
        self
    }

    /// Seed the store with raw configuration JSON (possibly malformed).
    pub fn with_config_json(mut self, json: impl Into<String>) -> Self {
        self.config = Some(json.into());
        self
    }

    pub fn game_json(&self) -> Option<&str> {
        self.game.as_deref()
    }

    pub fn config_json(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Number of successful game saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn load_game(&self) -> Option<GameSnapshot> {
        self.game.as_deref().and_then(parse_game_snapshot)
    }

    fn save_game(&mut self, snapshot: &GameSnapshot) -> Result<(), PersistError> {
        self.game = Some(serde_json::to_string(snapshot)?);
        self.saves += 1;
        Ok(())
    }

    fn load_config(&self) -> Option<Configuration> {
        self.config.as_deref().and_then(parse_config_record)
    }

    fn save_config(&mut self, config: &Configuration) -> Result<(), PersistError> {
        self.config = Some(serde_json::to_string(config)?);
        Ok(())
    }

    fn clear_game(&mut self) -> Result<(), PersistError> {
        self.game = None;
        Ok(())
    }
}
