//! Runtime configuration read from the environment.

pub mod storage;

pub use storage::StorageConfig;
