use crate::domain::{GameState, RawConfiguration, Screen};
use crate::errors::domain::ValidationKind;
use crate::game_flow::{apply, Operation};

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}

fn started(players: i64, hand: i64) -> GameState {
    let raw = RawConfiguration {
        player_count: Some(players),
        starting_hand_size: Some(hand),
        player_names: Some(names(players as usize)),
        first_dealer: Some(0),
        ..Default::default()
    };
    apply(&GameState::default(), Operation::StartGame(raw)).expect("start game")
}

fn run(state: GameState, ops: &[Operation]) -> GameState {
    ops.iter().cloned().fold(state, |s, op| {
        let name = op.name();
        apply(&s, op).unwrap_or_else(|e| panic!("{name} rejected: {e}"))
    })
}

fn rejected_kind(state: &GameState, op: Operation) -> ValidationKind {
    apply(state, op).expect_err("should be rejected").kind().clone()
}

#[test]
fn start_game_builds_schedule_and_opens_bidding() {
    let state = started(4, 7);
    assert_eq!(state.rounds.len(), 13);
    assert_eq!(state.rounds[0].hand_size, 7);
    assert_eq!(
        state.screen,
        Screen::Bidding {
            round: 0,
            bid_turn: 0
        }
    );
    assert_eq!(state.current_bidder(), Some(1));
}

#[test]
fn start_game_refuses_missing_names() {
    let raw = RawConfiguration {
        player_count: Some(3),
        player_names: Some(vec!["A".into(), "".into(), "C".into()]),
        ..Default::default()
    };
    let state = GameState::default();
    assert_eq!(
        rejected_kind(&state, Operation::StartGame(raw)),
        ValidationKind::MissingPlayerName
    );
}

#[test]
fn start_game_clamps_oversized_hand() {
    let raw = RawConfiguration {
        player_count: Some(8),
        starting_hand_size: Some(13),
        player_names: Some(names(8)),
        ..Default::default()
    };
    let state = apply(&GameState::default(), Operation::StartGame(raw)).unwrap();
    assert_eq!(state.config.starting_hand_size, 6);
    assert_eq!(state.rounds.len(), 11);
}

#[test]
fn four_player_seven_card_scenario() {
    let mut state = started(4, 7);
    for _ in 0..3 {
        state = run(state, &[Operation::SelectBid(0)]);
    }
    // Dealer (player 0) bids last; others bid 0 so 7 is forbidden.
    assert_eq!(state.current_bidder(), Some(0));
    assert_eq!(state.forbidden_bid_for_turn(), Some(7));
    assert_eq!(
        rejected_kind(&state, Operation::SelectBid(7)),
        ValidationKind::InvalidBid
    );

    state = run(state, &[Operation::SelectBid(0)]);
    assert_eq!(
        state.screen,
        Screen::Playing {
            round: 0,
            trick_no: 1,
            leader: 1
        }
    );

    state = run(state, &vec![Operation::RecordTrickWinner(1); 7]);
    assert_eq!(state.screen, Screen::Summary { round: 0 });
    let r0 = &state.rounds[0];
    assert_eq!(r0.round_scores, vec![10, 7, 10, 10]);
    assert_eq!(r0.totals, vec![10, 7, 10, 10]);
    assert!(r0.scored);
}

#[test]
fn out_of_turn_screens_reject_operations() {
    let state = GameState::default();
    assert_eq!(
        rejected_kind(&state, Operation::SelectBid(0)),
        ValidationKind::PhaseMismatch
    );
    assert_eq!(
        rejected_kind(&state, Operation::RecordTrickWinner(0)),
        ValidationKind::PhaseMismatch
    );
    assert_eq!(
        rejected_kind(&state, Operation::QuitGame),
        ValidationKind::PhaseMismatch
    );

    let bidding = started(3, 2);
    assert_eq!(
        rejected_kind(&bidding, Operation::NextRound),
        ValidationKind::PhaseMismatch
    );
    assert_eq!(
        rejected_kind(&bidding, Operation::UpdateConfig(RawConfiguration::default())),
        ValidationKind::PhaseMismatch
    );
    assert_eq!(
        rejected_kind(&bidding, Operation::StartGame(RawConfiguration::default())),
        ValidationKind::PhaseMismatch
    );
}

#[test]
fn bidding_undo_keeps_retracted_value() {
    let state = run(started(3, 4), &[Operation::SelectBid(3), Operation::SelectBid(1)]);
    let state = run(state, &[Operation::Undo]);
    assert_eq!(
        state.screen,
        Screen::Bidding {
            round: 0,
            bid_turn: 1
        }
    );
    // Player 2 bid 1 and is now on turn again; value still shown.
    assert_eq!(state.current_bidder(), Some(2));
    assert_eq!(state.rounds[0].bids[2], 1);

    let state = run(state, &[Operation::Undo]);
    assert_eq!(
        rejected_kind(&state, Operation::Undo),
        ValidationKind::NothingToUndo
    );
}

#[test]
fn record_then_undo_restores_exact_state() {
    let state = run(
        started(3, 3),
        &[
            Operation::SelectBid(1),
            Operation::SelectBid(1),
            Operation::SelectBid(0),
            Operation::RecordTrickWinner(2),
        ],
    );
    let after = run(
        state.clone(),
        &[Operation::RecordTrickWinner(0), Operation::Undo],
    );
    assert_eq!(after, state);
}

#[test]
fn leader_follows_previous_winner() {
    let state = run(
        started(3, 3),
        &[
            Operation::SelectBid(0),
            Operation::SelectBid(0),
            Operation::SelectBid(0),
            Operation::RecordTrickWinner(2),
        ],
    );
    assert_eq!(
        state.screen,
        Screen::Playing {
            round: 0,
            trick_no: 2,
            leader: 2
        }
    );
    let state = run(state, &[Operation::Undo]);
    assert_eq!(
        state.screen,
        Screen::Playing {
            round: 0,
            trick_no: 1,
            leader: 1
        }
    );
}

#[test]
fn playing_undo_without_tricks_returns_to_last_bidder() {
    let state = run(
        started(3, 2),
        &[
            Operation::SelectBid(1),
            Operation::SelectBid(0),
            Operation::SelectBid(0),
        ],
    );
    let state = run(state, &[Operation::Undo]);
    assert_eq!(
        state.screen,
        Screen::Bidding {
            round: 0,
            bid_turn: 2
        }
    );
    assert_eq!(state.current_bidder(), Some(0));
}

#[test]
fn summary_undo_reopens_last_trick() {
    let playing = run(
        started(2, 1),
        &[Operation::SelectBid(1), Operation::SelectBid(1)],
    );
    let summary = run(playing.clone(), &[Operation::RecordTrickWinner(0)]);
    assert_eq!(summary.screen, Screen::Summary { round: 0 });

    let reopened = run(summary, &[Operation::Undo]);
    assert_eq!(reopened, playing);
}

#[test]
fn next_round_advances_and_totals_accumulate() {
    let state = run(
        started(2, 2),
        &[
            Operation::SelectBid(1),
            Operation::SelectBid(2),
            Operation::RecordTrickWinner(0),
            Operation::RecordTrickWinner(0),
            Operation::NextRound,
        ],
    );
    assert_eq!(
        state.screen,
        Screen::Bidding {
            round: 1,
            bid_turn: 0
        }
    );
    // Round 1 dealer is player 1, so player 0 bids first.
    assert_eq!(state.current_bidder(), Some(0));
    assert_eq!(
        rejected_kind(&state, Operation::Undo),
        ValidationKind::NothingToUndo
    );

    let state = run(
        state,
        &[
            Operation::SelectBid(0),
            Operation::SelectBid(0),
            Operation::RecordTrickWinner(1),
        ],
    );
    assert_eq!(state.screen, Screen::Summary { round: 1 });
    assert_eq!(state.rounds[0].totals, vec![12, 0]);
    assert_eq!(state.rounds[1].round_scores, vec![10, 1]);
    assert_eq!(state.rounds[1].totals, vec![22, 1]);
}

#[test]
fn last_round_has_no_next() {
    let state = run(
        started(2, 1),
        &[
            Operation::SelectBid(0),
            Operation::SelectBid(0),
            Operation::RecordTrickWinner(1),
        ],
    );
    assert_eq!(
        rejected_kind(&state, Operation::NextRound),
        ValidationKind::NoNextRound
    );
}

#[test]
fn record_trick_rejects_unknown_player() {
    let state = run(
        started(2, 2),
        &[Operation::SelectBid(0), Operation::SelectBid(0)],
    );
    assert_eq!(
        rejected_kind(&state, Operation::RecordTrickWinner(2)),
        ValidationKind::InvalidPlayer
    );
}

#[test]
fn quit_mid_round_scores_partial_tricks() {
    let state = run(
        started(3, 4),
        &[
            Operation::SelectBid(1),
            Operation::SelectBid(2),
            Operation::SelectBid(0),
            Operation::RecordTrickWinner(1),
            Operation::QuitGame,
        ],
    );
    assert_eq!(state.screen, Screen::Summary { round: 0 });
    assert_eq!(state.rounds.len(), 1);
    // bids [0, 1, 2]; tricks [0, 1, 0]
    assert_eq!(state.rounds[0].round_scores, vec![10, 11, 0]);
    assert_eq!(state.rounds[0].totals, vec![10, 11, 0]);
    assert_eq!(
        rejected_kind(&state, Operation::NextRound),
        ValidationKind::NoNextRound
    );
}

#[test]
fn undo_after_mid_round_quit_reopens_last_trick() {
    let state = run(
        started(3, 3),
        &[
            Operation::SelectBid(1),
            Operation::SelectBid(1),
            Operation::SelectBid(0),
            Operation::RecordTrickWinner(1),
            Operation::RecordTrickWinner(2),
            Operation::QuitGame,
        ],
    );
    // bids [0, 1, 1]; tricks [0, 1, 1]
    assert_eq!(state.rounds[0].totals, vec![10, 11, 11]);
    assert_eq!(state.rounds.len(), 1);

    let state = run(state, &[Operation::Undo]);
    assert_eq!(
        state.screen,
        Screen::Playing {
            round: 0,
            trick_no: 2,
            leader: 1
        }
    );
    let r0 = &state.rounds[0];
    assert!(!r0.scored);
    assert_eq!(r0.trick_winners, vec![1]);
    assert_eq!(r0.round_scores, vec![0, 0, 0]);
    assert_eq!(r0.totals, vec![0, 0, 0]);
    assert_eq!(state.rounds.len(), 1);

    let state = run(
        state,
        &[Operation::RecordTrickWinner(0), Operation::RecordTrickWinner(2)],
    );
    assert_eq!(state.screen, Screen::Summary { round: 0 });
    assert_eq!(state.rounds[0].totals, vec![1, 11, 11]);
    assert_eq!(
        rejected_kind(&state, Operation::NextRound),
        ValidationKind::NoNextRound
    );
}

#[test]
fn quit_during_later_bidding_drops_unplayed_round() {
    let state = run(
        started(2, 2),
        &[
            Operation::SelectBid(1),
            Operation::SelectBid(0),
            Operation::RecordTrickWinner(0),
            Operation::RecordTrickWinner(1),
            Operation::NextRound,
            Operation::SelectBid(1),
            Operation::QuitGame,
        ],
    );
    assert_eq!(state.screen, Screen::Summary { round: 0 });
    assert_eq!(state.rounds.len(), 1);
    assert_eq!(state.rounds[0].totals, vec![1, 11]);
}

#[test]
fn quit_before_first_round_awards_nothing() {
    let state = run(started(3, 2), &[Operation::SelectBid(2), Operation::QuitGame]);
    assert_eq!(state.screen, Screen::Summary { round: 0 });
    assert_eq!(state.rounds.len(), 1);
    assert_eq!(state.rounds[0].bids, vec![0, 0, 0]);
    assert_eq!(state.rounds[0].totals, vec![0, 0, 0]);
    assert_eq!(
        rejected_kind(&state, Operation::Undo),
        ValidationKind::NothingToUndo
    );
}

#[test]
fn new_game_keeps_configuration() {
    let state = run(started(3, 2), &[Operation::QuitGame, Operation::NewGame]);
    assert_eq!(state.screen, Screen::Configuring);
    assert!(state.rounds.is_empty());
    assert_eq!(state.config.player_count, 3);
    assert_eq!(state.config.starting_hand_size, 2);
}

#[test]
fn rejected_operation_leaves_state_untouched() {
    let state = run(started(4, 3), &[Operation::SelectBid(1)]);
    let before = state.clone();
    assert!(apply(&state, Operation::SelectBid(9)).is_err());
    assert_eq!(state, before);
}
