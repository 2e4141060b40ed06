//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_serde;
pub mod cards_types;
pub mod config;
pub mod rules;
pub mod schedule;
pub mod scoring;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_bidding;

// Re-exports for ergonomics
pub use bidding::{forbidden_last_bid, is_bid_allowed, legal_bids, Bid};
pub use cards_types::Trump;
pub use config::{
    sanitize, validate_config, validate_deck_constraint, Configuration, RawConfiguration,
};
pub use rules::{
    bidding_order, dealer_index, first_leader_index, generate_hand_sequence, generate_suit_cycle,
};
pub use schedule::build_rounds;
pub use scoring::{cumulative_totals, round_score, round_scores, standings, Standing};
pub use state::{GameState, PlayerId, RoundDescriptor, Screen};
pub use view::{view, GameView, PromptView};
