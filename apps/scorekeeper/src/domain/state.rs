use serde::{Deserialize, Serialize};

use crate::domain::bidding::{forbidden_last_bid, legal_bids, Bid};
use crate::domain::cards_types::Trump;
use crate::domain::config::Configuration;
use crate::domain::rules::{bidding_order, first_leader_index};
use crate::domain::scoring::{standings, Standing};

pub type PlayerId = u8; // 0..player_count

/// Where the game is. Each screen carries only the cursor fields that mean
/// something on it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// No game running; configuration may be edited.
    Configuring,
    /// Players bid in `bidding_order`; `bid_turn` indexes into that order.
    Bidding { round: usize, bid_turn: usize },
    /// Tricks are being recorded; `trick_no` is 1-based.
    Playing {
        round: usize,
        trick_no: u8,
        leader: PlayerId,
    },
    /// Round scored (or game quit); totals are final for `round`.
    Summary { round: usize },
}

impl Screen {
    pub fn round(&self) -> Option<usize> {
        match *self {
            Screen::Configuring => None,
            Screen::Bidding { round, .. }
            | Screen::Playing { round, .. }
            | Screen::Summary { round } => Some(round),
        }
    }
}

/// One round of the schedule and everything recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDescriptor {
    pub index: usize,
    pub hand_size: u8,
    pub trump: Trump,
    pub dealer: PlayerId,
    pub bids: Vec<u8>,
    pub tricks_won: Vec<u8>,
    /// Winner of each recorded trick, in play order.
    #[serde(default)]
    pub trick_winners: Vec<PlayerId>,
    pub round_scores: Vec<u16>,
    pub totals: Vec<u16>,
    /// Set once scores and totals hold the computed values.
    #[serde(default)]
    pub scored: bool,
}

impl RoundDescriptor {
    pub fn new(
        index: usize,
        hand_size: u8,
        trump: Trump,
        dealer: PlayerId,
        player_count: u8,
    ) -> Self {
        let n = player_count as usize;
        Self {
            index,
            hand_size,
            trump,
            dealer,
            bids: vec![0; n],
            tricks_won: vec![0; n],
            trick_winners: Vec::new(),
            round_scores: vec![0; n],
            totals: vec![0; n],
            scored: false,
        }
    }

    pub fn player_count(&self) -> u8 {
        self.bids.len() as u8
    }

    pub fn tricks_played(&self) -> u8 {
        self.trick_winners.len() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.tricks_played() >= self.hand_size
    }

    pub fn bidding_order(&self) -> Vec<PlayerId> {
        bidding_order(self.dealer, self.player_count())
    }

    /// Leader of the next trick: the last winner, or left-of-dealer.
    pub fn next_leader(&self) -> PlayerId {
        self.trick_winners
            .last()
            .copied()
            .unwrap_or_else(|| first_leader_index(self.dealer, self.player_count()))
    }

    pub fn clear_scores(&mut self) {
        self.round_scores.iter_mut().for_each(|s| *s = 0);
        self.totals.iter_mut().for_each(|t| *t = 0);
        self.scored = false;
    }
}

/// Entire game container: configuration, schedule, and cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub config: Configuration,
    pub rounds: Vec<RoundDescriptor>,
    pub screen: Screen,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl GameState {
    /// Fresh state: no rounds, cursor on the configuration screen.
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            rounds: Vec::new(),
            screen: Screen::Configuring,
        }
    }

    pub fn player_count(&self) -> u8 {
        self.config.player_count
    }

    pub fn round(&self, index: usize) -> Option<&RoundDescriptor> {
        self.rounds.get(index)
    }

    pub fn round_mut(&mut self, index: usize) -> Option<&mut RoundDescriptor> {
        self.rounds.get_mut(index)
    }

    pub fn current_round(&self) -> Option<&RoundDescriptor> {
        self.screen.round().and_then(|r| self.round(r))
    }

    /// Player whose bid is expected, when bidding.
    pub fn current_bidder(&self) -> Option<PlayerId> {
        let Screen::Bidding { round, bid_turn } = self.screen else {
            return None;
        };
        self.round(round)?.bidding_order().get(bid_turn).copied()
    }

    /// Forbidden value for the bidder on turn (only ever the last bidder).
    pub fn forbidden_bid_for_turn(&self) -> Option<u8> {
        let bidder = self.current_bidder()?;
        let round = self.current_round()?;
        let order = round.bidding_order();
        if order.last() != Some(&bidder) {
            return None;
        }
        forbidden_last_bid(&round.bids, round.hand_size, &order)
    }

    pub fn legal_bids_for_turn(&self) -> Vec<Bid> {
        match (self.current_bidder(), self.current_round()) {
            (Some(bidder), Some(round)) => {
                legal_bids(bidder, &round.bids, round.hand_size, &round.bidding_order())
            }
            _ => Vec::new(),
        }
    }

    /// Totals of the most recent scored round at or before the cursor.
    pub fn latest_totals(&self) -> Vec<u16> {
        let upto = self.screen.round().unwrap_or(0);
        self.rounds
            .iter()
            .take(upto + 1)
            .rev()
            .find(|r| r.scored)
            .map(|r| r.totals.clone())
            .unwrap_or_else(|| vec![0; self.player_count() as usize])
    }

    pub fn standings(&self) -> Vec<Standing> {
        standings(&self.latest_totals())
    }
}
