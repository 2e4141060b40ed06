#![allow(dead_code)]


use scorekeeper::domain::{GameState, RawConfiguration, Screen};
use scorekeeper::{GameSession, Operation, Outcome, SnapshotStore};

pub fn table(players: u8, hand: u8) -> RawConfiguration {
    RawConfiguration {
        player_count: Some(players as i64),
        starting_hand_size: Some(hand as i64),
        player_names: Some(test_support::player_names("seat", players as usize)),
        first_dealer: Some(0),
        ..Default::default()
    }
}

pub fn must_apply<S: SnapshotStore>(session: &mut GameSession<S>, op: Operation) {
    let name = op.name();
    match session.dispatch(op) {
        Outcome::Applied => {}
        Outcome::Rejected(e) => panic!("{name} rejected: {e}"),
    }
}

/// Bid the lowest legal value for every seat, then give every trick to the
/// player on lead. Leaves the session on the round summary.
pub fn play_round_quietly<S: SnapshotStore>(session: &mut GameSession<S>) {
    while let Some(bid) = session.state().legal_bids_for_turn().first().map(|b| b.0) {
        must_apply(session, Operation::SelectBid(bid));
    }
    while let Screen::Playing { leader, .. } = session.state().screen {
        must_apply(session, Operation::RecordTrickWinner(leader));
    }
}

pub fn is_summary(state: &GameState) -> bool {
    matches!(state.screen, Screen::Summary { .. })
}
