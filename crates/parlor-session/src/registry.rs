//! The in-memory game registry.
//!
//! The registry is the only mutable shared state in the service. It is owned
//! by the application state and injected into handlers; there is no ambient
//! global. Games live for the process lifetime: no expiry or eviction is
//! defined, and nothing survives a restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tracing::info;
use uuid::Uuid;

use parlor_core::error::DomainError;

use crate::domain::Game;

/// Sentinel text returned when a game exists but has no storyline entry for
/// the requested act. A soft outcome, deliberately not an error.
pub const STORYLINE_NOT_FOUND: &str = "Storyline not found for this act.";

/// Authoritative map of game identifiers to game state.
///
/// The outer `RwLock` guards membership only; each game sits behind its own
/// `Mutex` so that check-then-act mutations (host check + round increment)
/// are serialized per game without blocking unrelated games.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: RwLock<HashMap<Uuid, Arc<Mutex<Game>>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game hosted by `host` and returns its identifier.
    ///
    /// Identifiers are random v4 UUIDs, so uniqueness holds under concurrent
    /// creation without global serialization.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the registry lock is
    /// poisoned.
    pub fn create_game(&self, host: impl Into<String>) -> Result<Uuid, DomainError> {
        let game_id = Uuid::new_v4();
        let game = Game::new(game_id, host);
        let host = game.host.clone();

        let mut games = self.games.write().map_err(|_| poisoned())?;
        games.insert(game_id, Arc::new(Mutex::new(game)));
        drop(games);

        info!(%game_id, %host, "game created");
        Ok(game_id)
    }

    /// Advances the game's round by one and returns the new round number.
    ///
    /// The host check and the increment happen under the game's own lock, so
    /// two concurrent host calls yield two distinct consecutive rounds and a
    /// non-host call can never slip through.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GameNotFound` for an unknown identifier and
    /// `DomainError::Unauthorized` when `caller` is not the game's host.
    pub fn advance_round(&self, game_id: Uuid, caller: &str) -> Result<u32, DomainError> {
        let entry = self.entry(game_id)?;
        let mut game = entry.lock().map_err(|_| poisoned())?;

        if game.host != caller {
            return Err(DomainError::Unauthorized(format!(
                "caller is not the host of game {game_id}"
            )));
        }

        game.round += 1;
        info!(%game_id, round = game.round, "game advanced");
        Ok(game.round)
    }

    /// Returns a point-in-time copy of the game.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GameNotFound` for an unknown identifier.
    pub fn snapshot(&self, game_id: Uuid) -> Result<Game, DomainError> {
        let entry = self.entry(game_id)?;
        let game = entry.lock().map_err(|_| poisoned())?;
        Ok(game.clone())
    }

    /// Looks up the storyline text for one act of a game.
    ///
    /// An unknown game is an error; an unknown act within a known game is
    /// not — it yields [`STORYLINE_NOT_FOUND`] so the narration path can
    /// still speak something sensible.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GameNotFound` for an unknown identifier.
    pub fn resolve_storyline_for_act(
        &self,
        game_id: Uuid,
        act: &str,
    ) -> Result<String, DomainError> {
        let entry = self.entry(game_id)?;
        let game = entry.lock().map_err(|_| poisoned())?;
        Ok(game
            .storyline
            .get(act)
            .cloned()
            .unwrap_or_else(|| STORYLINE_NOT_FOUND.to_string()))
    }

    /// Stores storyline text for one act.
    ///
    /// Entry point for the external content-authoring collaborator; no HTTP
    /// route exposes this.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GameNotFound` for an unknown identifier.
    pub fn insert_storyline(
        &self,
        game_id: Uuid,
        act: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        let entry = self.entry(game_id)?;
        let mut game = entry.lock().map_err(|_| poisoned())?;
        game.storyline.insert(act.into(), text.into());
        Ok(())
    }

    fn entry(&self, game_id: Uuid) -> Result<Arc<Mutex<Game>>, DomainError> {
        let games = self.games.read().map_err(|_| poisoned())?;
        games
            .get(&game_id)
            .cloned()
            .ok_or(DomainError::GameNotFound(game_id))
    }
}

fn poisoned() -> DomainError {
    DomainError::Infrastructure("game registry lock poisoned".into())
}
