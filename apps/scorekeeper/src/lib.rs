#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod game_flow;
pub mod persistence;

// Re-exports for public API
pub use config::StorageConfig;
pub use domain::{Configuration, GameState, GameView, RawConfiguration, Screen};
pub use error::AppError;
pub use errors::DomainError;
pub use game_flow::{apply, GameSession, Operation, Outcome};
pub use persistence::{FileStore, MemoryStore, SnapshotStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
