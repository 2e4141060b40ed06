use crate::domain::config::Configuration;
use crate::domain::rules::{dealer_index, generate_hand_sequence, generate_suit_cycle};
use crate::domain::state::RoundDescriptor;

/// Expand a sanitized configuration into the full round schedule.
pub fn build_rounds(config: &Configuration) -> Vec<RoundDescriptor> {
    let hands = generate_hand_sequence(config.starting_hand_size);
    let trumps = generate_suit_cycle(config.trump_start, hands.len());
    hands
        .into_iter()
        .zip(trumps)
        .enumerate()
        .map(|(index, (hand_size, trump))| {
            RoundDescriptor::new(
                index,
                hand_size,
                trump,
                dealer_index(config.first_dealer, index, config.player_count),
                config.player_count,
            )
        })
        .collect()
}
