use tracing::debug;

use crate::domain::{GameState, RoundDescriptor, Screen};
use crate::errors::domain::{DomainError, ValidationKind};

/// Step back one action on the current screen.
///
/// - bidding: previous bidder's turn; their bid stays for overwrite
/// - playing: remove the last trick, or fall back to the last bidder
/// - summary: reopen the round at its last trick, clearing its scores
pub(super) fn undo(state: &mut GameState) -> Result<(), DomainError> {
    let player_count = state.player_count() as usize;
    let screen = state.screen;
    match screen {
        Screen::Configuring => Err(DomainError::phase_mismatch("No game in progress")),
        Screen::Bidding { round, bid_turn } => {
            if bid_turn == 0 {
                return Err(nothing_to_undo());
            }
            state.screen = Screen::Bidding {
                round,
                bid_turn: bid_turn - 1,
            };
            debug!(round, bid_turn = bid_turn - 1, "Bid turn retracted");
            Ok(())
        }
        Screen::Playing { round, .. } => {
            let r = require_round(state, round)?;
            let next = if pop_last_trick(r) {
                playing_cursor(round, r)
            } else {
                debug!(round, "Back to bidding");
                Screen::Bidding {
                    round,
                    bid_turn: player_count.saturating_sub(1),
                }
            };
            state.screen = next;
            Ok(())
        }
        Screen::Summary { round } => {
            let r = require_round(state, round)?;
            if !pop_last_trick(r) {
                return Err(nothing_to_undo());
            }
            r.clear_scores();
            let next = playing_cursor(round, r);
            state.screen = next;
            debug!(round, "Summary reopened");
            Ok(())
        }
    }
}

fn require_round(state: &mut GameState, round: usize) -> Result<&mut RoundDescriptor, DomainError> {
    state
        .round_mut(round)
        .ok_or_else(|| DomainError::validation(ValidationKind::RoundNotFound, "Round not found"))
}

fn pop_last_trick(r: &mut RoundDescriptor) -> bool {
    let Some(winner) = r.trick_winners.pop() else {
        return false;
    };
    if let Some(count) = r.tricks_won.get_mut(winner as usize) {
        *count = count.saturating_sub(1);
    }
    true
}

fn playing_cursor(round: usize, r: &RoundDescriptor) -> Screen {
    Screen::Playing {
        round,
        trick_no: r.tricks_played() + 1,
        leader: r.next_leader(),
    }
}

fn nothing_to_undo() -> DomainError {
    DomainError::validation(ValidationKind::NothingToUndo, "Nothing to undo")
}
