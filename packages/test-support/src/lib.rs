//! Test support utilities shared by the scorekeeper integration tests.
//!
//! This crate provides unified logging initialization, throwaway state
//! directories, and seat-name fixtures.

pub mod logging;

use tempfile::TempDir;

/// Generate `count` distinct player names with the given prefix
///
/// # Examples
/// ```
/// use test_support::player_names;
///
/// let names = player_names("seat", 3);
/// assert_eq!(names, vec!["seat-1", "seat-2", "seat-3"]);
/// ```
pub fn player_names(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}-{i}")).collect()
}

/// Fresh empty directory for snapshot files, removed on drop.
pub fn state_dir() -> TempDir {
    match tempfile::Builder::new().prefix("scorekeeper-").tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("failed to create temp state dir: {e}"),
    }
}
