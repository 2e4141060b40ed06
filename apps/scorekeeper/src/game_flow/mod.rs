//! Game flow: the screen state machine over [`GameState`].
//!
//! [`apply`] is a pure function of (state, operation). Each transition works
//! on a copy, so a rejected operation leaves the caller's state untouched.
//! [`GameSession`] owns the live state and persists after every commit.

mod operation;
mod player_actions;
mod round_lifecycle;
mod session;
mod undo;

#[cfg(test)]
mod tests_transitions;

pub use operation::Operation;
pub use session::{GameSession, Outcome};

use crate::domain::GameState;
use crate::errors::domain::DomainError;

/// Apply one operation, returning the next state or the rule it broke.
pub fn apply(state: &GameState, op: Operation) -> Result<GameState, DomainError> {
    let mut next = state.clone();
    match op {
        Operation::UpdateConfig(raw) => round_lifecycle::update_config(&mut next, raw)?,
        Operation::StartGame(raw) => round_lifecycle::start_game(&mut next, raw)?,
        Operation::SelectBid(value) => player_actions::select_bid(&mut next, value)?,
        Operation::RecordTrickWinner(player) => {
            player_actions::record_trick_winner(&mut next, player)?
        }
        Operation::Undo => undo::undo(&mut next)?,
        Operation::NextRound => round_lifecycle::next_round(&mut next)?,
        Operation::NewGame => round_lifecycle::new_game(&mut next)?,
        Operation::QuitGame => round_lifecycle::quit_game(&mut next)?,
    }
    Ok(next)
}
