//! Domain-level error type used by the rules engine and the state machine.
//!
//! This error type is storage- and UI-agnostic. A rejected transition is
//! reported as a value; the game state it was applied to stays untouched.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation error kinds, one per rule a transition can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// `player_count * hand_size` exceeds the deck.
    DeckTooSmall,
    /// A player has an empty display name.
    MissingPlayerName,
    /// Bid out of range, or the last bidder picking the forbidden value.
    InvalidBid,
    /// Player index outside the table.
    InvalidPlayer,
    /// Operation not valid on the current screen.
    PhaseMismatch,
    /// Cursor points at a round that does not exist.
    RoundNotFound,
    /// Every trick of the round has already been recorded.
    RoundComplete,
    /// Nothing left to undo.
    NothingToUndo,
    /// The schedule has no round after the current one.
    NoNextRound,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn phase_mismatch(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::PhaseMismatch, detail.into())
    }

    /// The validation kind, for callers that branch on the rejected rule.
    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
