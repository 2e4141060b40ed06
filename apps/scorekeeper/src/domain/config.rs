//! Game configuration and its sanitizer.
//!
//! Raw input from a UI or from disk is never trusted: [`sanitize`] clamps it
//! into a configuration that satisfies the deck constraint by construction.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Trump;
use crate::domain::rules::{max_hand_size, DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

pub const DEFAULT_PLAYERS: u8 = 4;
pub const DEFAULT_HAND_SIZE: u8 = 7;

/// A sanitized configuration. `player_names.len() == player_count` always.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub player_count: u8,
    pub starting_hand_size: u8,
    pub trump_start: Trump,
    pub player_names: Vec<String>,
    pub first_dealer: PlayerId,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            starting_hand_size: DEFAULT_HAND_SIZE,
            trump_start: Trump::default(),
            player_names: (1..=DEFAULT_PLAYERS).map(|i| format!("Player {i}")).collect(),
            first_dealer: 0,
        }
    }
}

impl Configuration {
    pub fn name_of(&self, player: PlayerId) -> Option<&str> {
        self.player_names.get(player as usize).map(String::as_str)
    }
}

/// Unvalidated configuration as typed in by a user or read from storage.
///
/// Every field is optional so partial edits can be merged over a base.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfiguration {
    pub player_count: Option<i64>,
    pub starting_hand_size: Option<i64>,
    pub trump_start: Option<String>,
    pub player_names: Option<Vec<String>>,
    pub first_dealer: Option<i64>,
}

impl RawConfiguration {
    /// Fill unset fields from `base`.
    pub fn merged_over(self, base: &Configuration) -> RawConfiguration {
        let base = RawConfiguration::from(base.clone());
        RawConfiguration {
            player_count: self.player_count.or(base.player_count),
            starting_hand_size: self.starting_hand_size.or(base.starting_hand_size),
            trump_start: self.trump_start.or(base.trump_start),
            player_names: self.player_names.or(base.player_names),
            first_dealer: self.first_dealer.or(base.first_dealer),
        }
    }
}

impl From<Configuration> for RawConfiguration {
    fn from(config: Configuration) -> Self {
        Self {
            player_count: Some(config.player_count as i64),
            starting_hand_size: Some(config.starting_hand_size as i64),
            trump_start: Some(config.trump_start.as_str().to_string()),
            player_names: Some(config.player_names),
            first_dealer: Some(config.first_dealer as i64),
        }
    }
}

/// True iff `player_count` hands of `hand_size` cards fit in one deck.
pub fn validate_deck_constraint(player_count: u8, hand_size: u8) -> bool {
    player_count as u16 * hand_size as u16 <= DECK_SIZE
}

/// Clamp a raw configuration into a valid one. Idempotent.
pub fn sanitize(raw: &RawConfiguration) -> Configuration {
    let player_count = raw
        .player_count
        .unwrap_or(DEFAULT_PLAYERS as i64)
        .clamp(MIN_PLAYERS as i64, MAX_PLAYERS as i64) as u8;

    let max_hand = max_hand_size(player_count);
    let starting_hand_size = raw
        .starting_hand_size
        .unwrap_or(DEFAULT_HAND_SIZE as i64)
        .clamp(1, max_hand as i64) as u8;

    let trump_start = raw
        .trump_start
        .as_deref()
        .and_then(|s| s.parse::<Trump>().ok())
        .unwrap_or_default();

    let mut player_names: Vec<String> = raw
        .player_names
        .as_deref()
        .unwrap_or_default()
        .iter()
        .take(player_count as usize)
        .map(|name| name.trim().to_string())
        .collect();
    player_names.resize(player_count as usize, String::new());

    let first_dealer = raw
        .first_dealer
        .unwrap_or(0)
        .clamp(0, player_count as i64 - 1) as PlayerId;

    Configuration {
        player_count,
        starting_hand_size,
        trump_start,
        player_names,
        first_dealer,
    }
}

/// Sanitize and check that the result can start a game.
pub fn validate_config(raw: &RawConfiguration) -> Result<Configuration, DomainError> {
    let config = sanitize(raw);
    if !validate_deck_constraint(config.player_count, config.starting_hand_size) {
        return Err(DomainError::validation(
            ValidationKind::DeckTooSmall,
            format!(
                "{} players x {} cards exceeds the deck",
                config.player_count, config.starting_hand_size
            ),
        ));
    }
    if let Some(missing) = config.player_names.iter().position(|n| n.is_empty()) {
        return Err(DomainError::validation(
            ValidationKind::MissingPlayerName,
            format!("Player {} needs a name", missing + 1),
        ));
    }
    Ok(config)
}
