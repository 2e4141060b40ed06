//! Persisted snapshot of a game and of the last-used configuration.
//!
//! Stores are best-effort: a snapshot that fails to load is treated as
//! absent, and a failed save never affects the in-memory game.

mod file_store;
mod snapshot;
mod store;

pub use file_store::FileStore;
pub use snapshot::{parse_config_record, parse_game_snapshot, GameSnapshot};
pub use store::{MemoryStore, PersistError, SnapshotStore};
