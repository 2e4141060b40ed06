//! JSON files on disk: `game.json` and `config.json` in one directory.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use super::snapshot::{parse_config_record, parse_game_snapshot, GameSnapshot};
use super::store::{PersistError, SnapshotStore};
use crate::config::StorageConfig;
use crate::domain::Configuration;

#[derive(Debug, Clone)]
pub struct FileStore {
    game_path: PathBuf,
    config_path: PathBuf,
}

impl FileStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            game_path: config.game_path(),
            config_path: config.config_path(),
        }
    }

    pub fn game_path(&self) -> &Path {
        &self.game_path
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

impl SnapshotStore for FileStore {
    fn load_game(&self) -> Option<GameSnapshot> {
        read_optional(&self.game_path).as_deref().and_then(parse_game_snapshot)
    }

    fn save_game(&mut self, snapshot: &GameSnapshot) -> Result<(), PersistError> {
        write_json_atomic(&self.game_path, snapshot)
    }

    fn load_config(&self) -> Option<Configuration> {
        read_optional(&self.config_path)
            .as_deref()
            .and_then(parse_config_record)
    }

    fn save_config(&mut self, config: &Configuration) -> Result<(), PersistError> {
        write_json_atomic(&self.config_path, config)
    }

    fn clear_game(&mut self) -> Result<(), PersistError> {
        match std::fs::remove_file(&self.game_path) {
            Ok(()) => {
                debug!(path = %self.game_path.display(), "Game snapshot removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads a file, returning None if it doesn't exist or can't be read.
fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read snapshot");
            None
        }
    }
}

/// Write to a temp file, then rename over the target.
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(value)?;
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
    }
    std::fs::rename(&tmp_path, path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Snapshot written");
    Ok(())
}
