//! Public view of the game for a UI: what to show on the current screen.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Trump;
use crate::domain::scoring::Standing;
use crate::domain::state::{GameState, PlayerId, RoundDescriptor, Screen};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub player: PlayerId,
    pub name: String,
    pub bid: u8,
    pub tricks_won: u8,
    pub round_score: u16,
    pub total: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub round_no: usize,
    pub rounds_total: usize,
    pub hand_size: u8,
    pub trump: Trump,
    pub dealer: PlayerId,
    pub players: Vec<PlayerLine>,
}

/// Screen-specific prompt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "data", rename_all = "snake_case")]
pub enum PromptView {
    Configuring,
    Bidding {
        bidder: PlayerId,
        legal_bids: Vec<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        forbidden: Option<u8>,
    },
    Playing {
        trick_no: u8,
        leader: PlayerId,
    },
    Summary {
        has_next_round: bool,
        standings: Vec<Standing>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub player_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
    pub prompt: PromptView,
}

/// Produce a view of the current state. Never panics.
pub fn view(state: &GameState) -> GameView {
    let round = state.current_round().map(|r| round_view(state, r));

    let prompt = match state.screen {
        Screen::Configuring => PromptView::Configuring,
        Screen::Bidding { .. } => PromptView::Bidding {
            bidder: state.current_bidder().unwrap_or(0),
            legal_bids: state.legal_bids_for_turn().iter().map(|b| b.0).collect(),
            forbidden: state.forbidden_bid_for_turn(),
        },
        Screen::Playing {
            trick_no, leader, ..
        } => PromptView::Playing { trick_no, leader },
        Screen::Summary { round } => PromptView::Summary {
            has_next_round: state.round(round + 1).is_some(),
            standings: state.standings(),
        },
    };

    GameView {
        player_names: state.config.player_names.clone(),
        round,
        prompt,
    }
}

fn round_view(state: &GameState, r: &RoundDescriptor) -> RoundView {
    let players = (0..r.player_count())
        .map(|p| {
            let i = p as usize;
            PlayerLine {
                player: p,
                name: state.config.name_of(p).unwrap_or_default().to_string(),
                bid: r.bids[i],
                tricks_won: r.tricks_won.get(i).copied().unwrap_or(0),
                round_score: r.round_scores.get(i).copied().unwrap_or(0),
                total: r.totals.get(i).copied().unwrap_or(0),
            }
        })
        .collect();
    RoundView {
        round_no: r.index + 1,
        rounds_total: state.rounds.len(),
        hand_size: r.hand_size,
        trump: r.trump,
        dealer: r.dealer,
        players,
    }
}
