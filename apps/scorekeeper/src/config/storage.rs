use std::env;
use std::path::{Path, PathBuf};

/// Where snapshots live. Overridable via `SCOREKEEPER_STATE_DIR`.
pub const STATE_DIR_VAR: &str = "SCOREKEEPER_STATE_DIR";
pub const DEFAULT_STATE_DIR: &str = ".scorekeeper";

const GAME_FILE: &str = "game.json";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    state_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            state_dir: state_dir.as_ref().to_path_buf(),
        }
    }

    /// Read the state directory from the environment (defaults to `.scorekeeper`)
    pub fn from_env() -> Self {
        let dir = env::var(STATE_DIR_VAR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STATE_DIR.to_string());
        Self::new(dir)
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn game_path(&self) -> PathBuf {
        self.state_dir.join(GAME_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.state_dir.join(CONFIG_FILE)
    }
}
