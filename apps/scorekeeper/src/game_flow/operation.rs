use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, RawConfiguration};

/// Every input the state machine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "data", rename_all = "snake_case")]
pub enum Operation {
    /// Edit the configuration while no game is running.
    UpdateConfig(RawConfiguration),
    /// Start a game; unset fields fall back to the current configuration.
    StartGame(RawConfiguration),
    SelectBid(u8),
    RecordTrickWinner(PlayerId),
    Undo,
    NextRound,
    NewGame,
    QuitGame,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::UpdateConfig(_) => "update_config",
            Operation::StartGame(_) => "start_game",
            Operation::SelectBid(_) => "select_bid",
            Operation::RecordTrickWinner(_) => "record_trick_winner",
            Operation::Undo => "undo",
            Operation::NextRound => "next_round",
            Operation::NewGame => "new_game",
            Operation::QuitGame => "quit_game",
        }
    }
}
