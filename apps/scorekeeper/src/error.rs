use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::persistence::PersistError;

/// Errors surfaced at the edge of the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rejected: {0}")]
    Rejected(#[from] DomainError),
    #[error("Storage error: {0}")]
    Storage(#[from] PersistError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Rejected(_) => 2,
            AppError::Config { .. } => 3,
            AppError::Storage(_) | AppError::Output(_) => 1,
        }
    }
}
