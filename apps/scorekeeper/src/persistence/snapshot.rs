//! Wire shape of the saved game and the boundary checks applied on load.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::domain::config::{sanitize, Configuration, RawConfiguration};
use crate::domain::rules::max_hand_size;
use crate::domain::scoring::apply_round_scoring;
use crate::domain::{GameState, RoundDescriptor, Screen};

/// Saved game: configuration, schedule and cursor, all required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: Configuration,
    pub rounds: Vec<RoundDescriptor>,
    pub cursor: Screen,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            config: state.config.clone(),
            rounds: state.rounds.clone(),
            cursor: state.screen,
            saved_at: OffsetDateTime::now_utc().format(&Rfc3339).ok(),
        }
    }

    /// Rebuild a game state, never trusting indices from disk.
    pub fn into_state(self) -> GameState {
        let config = sanitize(&RawConfiguration::from(self.config));
        let player_count = config.player_count;
        let mut rounds = self.rounds;
        for (index, round) in rounds.iter_mut().enumerate() {
            repair_round(round, index, player_count);
        }

        let mut state = GameState {
            config,
            rounds,
            screen: Screen::Configuring,
        };
        state.screen = repair_cursor(&mut state, self.cursor);
        state
    }
}

fn repair_round(round: &mut RoundDescriptor, index: usize, player_count: u8) {
    let n = player_count as usize;
    round.index = index;
    round.hand_size = round.hand_size.clamp(1, max_hand_size(player_count));
    round.dealer = round.dealer.min(player_count - 1);

    round.bids.resize(n, 0);
    for bid in round.bids.iter_mut() {
        *bid = (*bid).min(round.hand_size);
    }

    let dropped = round.trick_winners.len();
    round.trick_winners.retain(|&p| p < player_count);
    round.trick_winners.truncate(round.hand_size as usize);
    let dropped = dropped - round.trick_winners.len();
    if dropped > 0 {
        warn!(round = index, dropped, "Dropped invalid trick winners from snapshot");
    }

    // Counts are derived from the history so the two can never disagree.
    round.tricks_won = vec![0; n];
    for &winner in &round.trick_winners {
        round.tricks_won[winner as usize] += 1;
    }

    round.round_scores.resize(n, 0);
    round.totals.resize(n, 0);
}

fn repair_cursor(state: &mut GameState, cursor: Screen) -> Screen {
    let Some(last) = state.rounds.len().checked_sub(1) else {
        return Screen::Configuring;
    };
    let player_count = state.player_count() as usize;

    match cursor {
        Screen::Configuring => {
            state.rounds.clear();
            Screen::Configuring
        }
        Screen::Bidding { round, bid_turn } => Screen::Bidding {
            round: round.min(last),
            bid_turn: bid_turn.min(player_count - 1),
        },
        Screen::Playing { round, .. } => {
            let round = round.min(last);
            match state.round(round) {
                Some(r) if r.is_complete() => summary_cursor(state, round),
                Some(r) => Screen::Playing {
                    round,
                    trick_no: r.tricks_played() + 1,
                    leader: r.next_leader(),
                },
                None => Screen::Configuring,
            }
        }
        Screen::Summary { round } => summary_cursor(state, round.min(last)),
    }
}

// A summary always shows a scored round; a stale snapshot may predate scoring.
fn summary_cursor(state: &mut GameState, round: usize) -> Screen {
    if apply_round_scoring(&mut state.rounds, round) {
        warn!(round, "Scored round restored from an unscored snapshot");
    }
    Screen::Summary { round }
}

/// Parse a saved game, treating anything malformed as absent.
pub fn parse_game_snapshot(json: &str) -> Option<GameSnapshot> {
    match serde_json::from_str::<GameSnapshot>(json) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(error = %e, "Discarding malformed game snapshot");
            None
        }
    }
}

/// Parse the saved configuration leniently and sanitize it.
pub fn parse_config_record(json: &str) -> Option<Configuration> {
    match serde_json::from_str::<RawConfiguration>(json) {
        Ok(raw) => Some(sanitize(&raw)),
        Err(e) => {
            warn!(error = %e, "Discarding malformed configuration record");
            None
        }
    }
}
