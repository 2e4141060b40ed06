use serde::{Deserialize, Serialize};

use crate::domain::rules::EXACT_BID_BONUS;
use crate::domain::state::{PlayerId, RoundDescriptor};

/// Tricks taken plus the exact-bid bonus. Missing a bid costs nothing.
pub fn round_score(bid: u8, tricks_taken: u8) -> u16 {
    let bonus = if bid == tricks_taken {
        EXACT_BID_BONUS
    } else {
        0
    };
    tricks_taken as u16 + bonus
}

pub fn round_scores(bids: &[u8], tricks_taken: &[u8]) -> Vec<u16> {
    bids.iter()
        .zip(tricks_taken)
        .map(|(&bid, &tricks)| round_score(bid, tricks))
        .collect()
}

pub fn cumulative_totals(previous_totals: &[u16], round_scores: &[u16]) -> Vec<u16> {
    previous_totals
        .iter()
        .zip(round_scores)
        .map(|(&prev, &score)| prev.saturating_add(score))
        .collect()
}

/// Score round `index` from the tricks recorded so far and mark it scored.
///
/// Totals build on the previous round's totals (zeros for round 0).
/// No-op returning `false` if the round is missing or already scored.
pub fn apply_round_scoring(rounds: &mut [RoundDescriptor], index: usize) -> bool {
    let previous = match index.checked_sub(1) {
        Some(prev) => match rounds.get(prev) {
            Some(r) => Some(r.totals.clone()),
            None => return false,
        },
        None => None,
    };
    let Some(round) = rounds.get_mut(index) else {
        return false;
    };
    if round.scored {
        return false;
    }
    let previous = previous.unwrap_or_else(|| vec![0; round.player_count() as usize]);
    round.round_scores = round_scores(&round.bids, &round.tricks_won);
    round.totals = cumulative_totals(&previous, &round.round_scores);
    round.scored = true;
    true
}

/// A player's place in the running totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based; tied players share a rank.
    pub rank: u8,
    pub player: PlayerId,
    pub total: u16,
}

/// Rank players by total, highest first. Ties keep seat order and share a rank.
pub fn standings(totals: &[u16]) -> Vec<Standing> {
    let mut order: Vec<(PlayerId, u16)> = totals
        .iter()
        .enumerate()
        .map(|(p, &t)| (p as PlayerId, t))
        .collect();
    order.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut out: Vec<Standing> = Vec::with_capacity(order.len());
    for (i, (player, total)) in order.into_iter().enumerate() {
        let rank = match out.last() {
            Some(prev) if prev.total == total => prev.rank,
            _ => (i + 1) as u8,
        };
        out.push(Standing {
            rank,
            player,
            total,
        });
    }
    out
}
