use tracing::{debug, info, warn};

use super::{apply, Operation};
use crate::domain::{GameState, Screen};
use crate::errors::domain::DomainError;
use crate::persistence::{GameSnapshot, SnapshotStore};

/// Result of dispatching one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    /// Guard failed; the state is exactly as before.
    Rejected(DomainError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Owns the live game state and the store it is saved to.
pub struct GameSession<S: SnapshotStore> {
    state: GameState,
    store: S,
    /// The store's configuration record is known to equal `state.config`.
    config_synced: bool,
}

impl<S: SnapshotStore> GameSession<S> {
    pub fn new(state: GameState, store: S) -> Self {
        Self {
            state,
            store,
            config_synced: false,
        }
    }

    /// Resume from the store: saved game, else saved configuration, else defaults.
    ///
    /// A game restored without a matching configuration record gets one
    /// written straight away, so the table survives the game being cleared.
    pub fn restore(store: S) -> Self {
        if let Some(snapshot) = store.load_game() {
            let state = snapshot.into_state();
            info!(screen = ?state.screen, rounds = state.rounds.len(), "Game restored");
            let config_synced = store.load_config().as_ref() == Some(&state.config);
            let mut session = Self {
                state,
                store,
                config_synced,
            };
            if !session.config_synced {
                session.save_config();
            }
            return session;
        }

        match store.load_config() {
            Some(config) => {
                debug!("No saved game; using saved configuration");
                Self {
                    state: GameState::new(config),
                    store,
                    config_synced: true,
                }
            }
            None => Self::new(GameState::default(), store),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply `op`; on success commit and save, on failure keep the old state.
    pub fn dispatch(&mut self, op: Operation) -> Outcome {
        let name = op.name();
        match apply(&self.state, op) {
            Ok(next) => {
                let config_changed = next.config != self.state.config;
                self.state = next;
                debug!(op = name, screen = ?self.state.screen, "Transition applied");
                self.persist(config_changed);
                Outcome::Applied
            }
            Err(e) => {
                debug!(op = name, error = %e, "Transition rejected");
                Outcome::Rejected(e)
            }
        }
    }

    // Failures are logged and otherwise ignored; memory stays authoritative.
    fn persist(&mut self, config_changed: bool) {
        let saved = if self.state.screen == Screen::Configuring {
            self.store.clear_game()
        } else {
            self.store.save_game(&GameSnapshot::capture(&self.state))
        };
        if let Err(e) = saved {
            warn!(error = %e, "Failed to save game snapshot");
        }
        if config_changed || !self.config_synced {
            self.save_config();
        }
    }

    fn save_config(&mut self) {
        match self.store.save_config(&self.state.config) {
            Ok(()) => self.config_synced = true,
            Err(e) => {
                self.config_synced = false;
                warn!(error = %e, "Failed to save configuration");
            }
        }
    }
}
