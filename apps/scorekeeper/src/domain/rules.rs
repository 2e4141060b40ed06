use std::ops::RangeInclusive;

use crate::domain::cards_types::Trump;
use crate::domain::state::PlayerId;

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 8;
pub const DECK_SIZE: u16 = 52;

/// Points added to the trick count when a player makes their bid exactly.
pub const EXACT_BID_BONUS: u16 = 10;

// Hand-size schedule: n → n-1 → ... → 1 → 2 → ... → n
// Total 2n - 1 rounds.
pub fn generate_hand_sequence(n: u8) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    (1..=n).rev().chain(2..=n).collect()
}

/// Number of rounds a game with the given starting hand size lasts.
pub fn round_count(starting_hand_size: u8) -> usize {
    (2 * starting_hand_size as usize).saturating_sub(1)
}

/// Trump for each of `count` rounds, cycling the fixed rotation from `origin`.
pub fn generate_suit_cycle(origin: Trump, count: usize) -> Vec<Trump> {
    let start = origin.rotation_index();
    (0..count)
        .map(|i| Trump::ROTATION[(start + i) % Trump::ROTATION.len()])
        .collect()
}

/// Largest starting hand that still fits the deck for `player_count` players.
pub fn max_hand_size(player_count: u8) -> u8 {
    if player_count == 0 {
        return 0;
    }
    (DECK_SIZE / player_count as u16).min(u8::MAX as u16) as u8
}

pub fn valid_bid_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}

/// Seat / turn math helpers for a table of `player_count` seats.
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: usize, player_count: u8) -> PlayerId {
    if player_count == 0 {
        return 0;
    }
    ((seat as usize + delta) % player_count as usize) as PlayerId
}

/// Dealer position for a 0-based round index.
///
/// Round 0 → first_dealer
/// Round 1 → first_dealer + 1 (mod player_count)
#[inline]
pub fn dealer_index(first_dealer: PlayerId, round_index: usize, player_count: u8) -> PlayerId {
    seat_offset(first_dealer, round_index, player_count)
}

/// Bidding starts at left-of-dealer and rotates clockwise; the dealer bids last.
pub fn bidding_order(dealer: PlayerId, player_count: u8) -> Vec<PlayerId> {
    (1..=player_count as usize)
        .map(|step| seat_offset(dealer, step, player_count))
        .collect()
}

/// Round-start seat (player to the left of the dealer) leads the first trick.
#[inline]
pub fn first_leader_index(dealer: PlayerId, player_count: u8) -> PlayerId {
    seat_offset(dealer, 1, player_count)
}
