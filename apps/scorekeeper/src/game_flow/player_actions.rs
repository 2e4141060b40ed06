use tracing::{debug, info};

use crate::domain::bidding::is_bid_allowed;
use crate::domain::scoring::apply_round_scoring;
use crate::domain::{GameState, PlayerId, Screen};
use crate::errors::domain::{DomainError, ValidationKind};

/// Record the bid of the player on turn and advance the bidding cursor.
///
/// The last valid bid moves the game to trick 1, led by left-of-dealer.
pub(super) fn select_bid(state: &mut GameState, value: u8) -> Result<(), DomainError> {
    let Screen::Bidding { round, bid_turn } = state.screen else {
        return Err(DomainError::phase_mismatch("Not in bidding phase"));
    };
    let r = state
        .round_mut(round)
        .ok_or_else(|| DomainError::validation(ValidationKind::RoundNotFound, "Round not found"))?;

    let order = r.bidding_order();
    let bidder = *order.get(bid_turn).ok_or_else(|| {
        DomainError::validation_other(format!("Bid turn {bid_turn} out of range"))
    })?;

    if !is_bid_allowed(bidder, value, &r.bids, r.hand_size, &order) {
        let detail = if value > r.hand_size {
            format!("Bid must be in range 0..={}", r.hand_size)
        } else {
            format!(
                "Dealer cannot bid {value}: total bids would equal hand size {}",
                r.hand_size
            )
        };
        return Err(DomainError::validation(ValidationKind::InvalidBid, detail));
    }

    r.bids[bidder as usize] = value;
    debug!(round, player = bidder, bid = value, "Bid recorded");

    let next = if bid_turn + 1 < order.len() {
        Screen::Bidding {
            round,
            bid_turn: bid_turn + 1,
        }
    } else {
        info!(round, bids = ?r.bids, "Bidding complete");
        Screen::Playing {
            round,
            trick_no: r.tricks_played() + 1,
            leader: r.next_leader(),
        }
    };
    state.screen = next;
    Ok(())
}

/// Credit the current trick to `player`; they lead the next one.
///
/// Recording the round's final trick scores the round and shows the summary.
pub(super) fn record_trick_winner(
    state: &mut GameState,
    player: PlayerId,
) -> Result<(), DomainError> {
    let Screen::Playing { round, trick_no, .. } = state.screen else {
        return Err(DomainError::phase_mismatch("Not in trick play"));
    };
    if player >= state.player_count() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayer,
            format!("No player {player} at this table"),
        ));
    }
    let r = state
        .round_mut(round)
        .ok_or_else(|| DomainError::validation(ValidationKind::RoundNotFound, "Round not found"))?;
    if r.is_complete() {
        return Err(DomainError::validation(
            ValidationKind::RoundComplete,
            "All tricks already recorded",
        ));
    }

    r.tricks_won[player as usize] += 1;
    r.trick_winners.push(player);
    debug!(round, trick_no, player, "Trick recorded");

    if r.is_complete() {
        apply_round_scoring(&mut state.rounds, round);
        if let Some(r) = state.round(round) {
            info!(round, totals = ?r.totals, "Round scored");
        }
        state.screen = Screen::Summary { round };
    } else {
        state.screen = Screen::Playing {
            round,
            trick_no: trick_no + 1,
            leader: player,
        };
    }
    Ok(())
}
