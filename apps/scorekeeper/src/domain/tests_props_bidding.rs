//! Property tests for bidding logic (pure domain).
//!
//! - The dealer bids last and is the only constrained bidder
//! - The forbidden value is exactly the one completing the hand
//! - Whatever the earlier bids, the dealer always has a legal bid

use proptest::prelude::*;

use crate::domain::bidding::{forbidden_last_bid, is_bid_allowed, legal_bids};
use crate::domain::rules::bidding_order;
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a legal final bid never makes the total equal the hand size
    #[test]
    fn prop_total_never_equals_hand_size(
        (pc, hs, dealer, bids) in test_gens::bidding_setup(),
    ) {
        let order = bidding_order(dealer, pc);
        let earlier: u32 = order[..order.len() - 1].iter().map(|&p| bids[p as usize] as u32).sum();
        for v in 0..=hs {
            if is_bid_allowed(dealer, v, &bids, hs, &order) {
                prop_assert_ne!(earlier + v as u32, hs as u32);
            }
        }
    }

    /// Property: the dealer always has at least one legal bid
    #[test]
    fn prop_dealer_always_has_a_bid(
        (pc, hs, dealer, bids) in test_gens::bidding_setup(),
    ) {
        let order = bidding_order(dealer, pc);
        let legal = legal_bids(dealer, &bids, hs, &order);
        prop_assert!(!legal.is_empty());
        let forbidden = forbidden_last_bid(&bids, hs, &order);
        let expected = hs as usize + 1 - usize::from(forbidden.is_some());
        prop_assert_eq!(legal.len(), expected);
    }

    /// Property: every non-dealer may bid anything in [0, hand_size]
    #[test]
    fn prop_non_dealers_unconstrained(
        (pc, hs, dealer, bids) in test_gens::bidding_setup(),
    ) {
        let order = bidding_order(dealer, pc);
        for &p in &order[..order.len() - 1] {
            prop_assert_eq!(legal_bids(p, &bids, hs, &order).len(), hs as usize + 1);
            prop_assert!(!is_bid_allowed(p, hs + 1, &bids, hs, &order));
        }
    }

    /// Property: forbidden value, when present, lies in [0, hand_size]
    #[test]
    fn prop_forbidden_in_range(
        (pc, hs, dealer, bids) in test_gens::bidding_setup(),
    ) {
        let order = bidding_order(dealer, pc);
        if let Some(f) = forbidden_last_bid(&bids, hs, &order) {
            prop_assert!(f <= hs);
        }
    }
}
