use tracing::{debug, info};

use crate::domain::config::{sanitize, validate_config};
use crate::domain::schedule::build_rounds;
use crate::domain::scoring::apply_round_scoring;
use crate::domain::{GameState, RawConfiguration, Screen};
use crate::errors::domain::{DomainError, ValidationKind};

pub(super) fn update_config(
    state: &mut GameState,
    raw: RawConfiguration,
) -> Result<(), DomainError> {
    if state.screen != Screen::Configuring {
        return Err(DomainError::phase_mismatch(
            "Configuration is locked while a game is running",
        ));
    }
    state.config = sanitize(&raw.merged_over(&state.config));
    debug!(config = ?state.config, "Configuration updated");
    Ok(())
}

/// Replace the state wholesale with a freshly scheduled game.
pub(super) fn start_game(
    state: &mut GameState,
    raw: RawConfiguration,
) -> Result<(), DomainError> {
    if state.screen != Screen::Configuring {
        return Err(DomainError::phase_mismatch("Game already in progress"));
    }
    let config = validate_config(&raw.merged_over(&state.config))?;
    let rounds = build_rounds(&config);
    info!(
        players = config.player_count,
        starting_hand_size = config.starting_hand_size,
        rounds = rounds.len(),
        "Game started"
    );
    *state = GameState {
        config,
        rounds,
        screen: Screen::Bidding {
            round: 0,
            bid_turn: 0,
        },
    };
    Ok(())
}

pub(super) fn next_round(state: &mut GameState) -> Result<(), DomainError> {
    let Screen::Summary { round } = state.screen else {
        return Err(DomainError::phase_mismatch("Round not finished"));
    };
    let next = round + 1;
    if state.round(next).is_none() {
        return Err(DomainError::validation(
            ValidationKind::NoNextRound,
            "No rounds left in the schedule",
        ));
    }
    state.screen = Screen::Bidding {
        round: next,
        bid_turn: 0,
    };
    debug!(round = next, "Next round");
    Ok(())
}

/// Back to configuration, keeping the configuration.
pub(super) fn new_game(state: &mut GameState) -> Result<(), DomainError> {
    if !matches!(state.screen, Screen::Summary { .. }) {
        return Err(DomainError::phase_mismatch("Finish or quit the game first"));
    }
    state.rounds.clear();
    state.screen = Screen::Configuring;
    debug!("New game");
    Ok(())
}

/// End the game early and jump to the summary.
///
/// Playing: rounds after the current one are dropped and the current round is
/// scored from the tricks recorded so far. Bidding: the unplayed round is
/// dropped and the summary shows the previous round; quitting before round 0
/// is played keeps round 0 with nothing awarded.
pub(super) fn quit_game(state: &mut GameState) -> Result<(), DomainError> {
    let round = match state.screen {
        Screen::Bidding { round, .. } | Screen::Playing { round, .. } => round,
        _ => return Err(DomainError::phase_mismatch("No round in progress")),
    };
    if state.round(round).is_none() {
        return Err(DomainError::validation(
            ValidationKind::RoundNotFound,
            "Round not found",
        ));
    }

    let screen = state.screen;
    let summary_round = match screen {
        Screen::Playing { .. } => {
            state.rounds.truncate(round + 1);
            apply_round_scoring(&mut state.rounds, round);
            round
        }
        _ if round > 0 => {
            state.rounds.truncate(round);
            round - 1
        }
        _ => {
            state.rounds.truncate(1);
            if let Some(r) = state.round_mut(0) {
                r.bids.iter_mut().for_each(|b| *b = 0);
                r.clear_scores();
                r.scored = true;
            }
            0
        }
    };

    state.screen = Screen::Summary {
        round: summary_round,
    };
    info!(round = summary_round, rounds = state.rounds.len(), "Game quit");
    Ok(())
}
