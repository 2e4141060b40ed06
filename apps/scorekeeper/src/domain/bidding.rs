use serde::{Deserialize, Serialize};

use crate::domain::rules::valid_bid_range;
use crate::domain::state::PlayerId;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bid(pub u8);

/// Value the last bidder may not choose, if any.
///
/// Sums every bid except the last bidder's; the forbidden value is what would
/// make the total equal the hand size. Only reported when it lies within
/// `[0, hand_size]`.
pub fn forbidden_last_bid(bids: &[u8], hand_size: u8, bidding_order: &[PlayerId]) -> Option<u8> {
    let (_, earlier) = bidding_order.split_last()?;
    let sum: u32 = earlier
        .iter()
        .map(|&p| bids.get(p as usize).copied().unwrap_or(0) as u32)
        .sum();
    (hand_size as u32)
        .checked_sub(sum)
        .map(|forbidden| forbidden as u8)
}

pub fn is_bid_allowed(
    player: PlayerId,
    value: u8,
    bids: &[u8],
    hand_size: u8,
    bidding_order: &[PlayerId],
) -> bool {
    if !valid_bid_range(hand_size).contains(&value) {
        return false;
    }
    if bidding_order.last() != Some(&player) {
        return true;
    }
    forbidden_last_bid(bids, hand_size, bidding_order) != Some(value)
}

/// Bids `player` may choose right now, in ascending order.
pub fn legal_bids(
    player: PlayerId,
    bids: &[u8],
    hand_size: u8,
    bidding_order: &[PlayerId],
) -> Vec<Bid> {
    valid_bid_range(hand_size)
        .filter(|&v| is_bid_allowed(player, v, bids, hand_size, bidding_order))
        .map(Bid)
        .collect()
}
