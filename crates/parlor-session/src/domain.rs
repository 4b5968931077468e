//! Game state owned by the registry.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

/// Lifecycle tag for a game.
///
/// Only `Created` is produced by the current operations; the remaining
/// variants are reachable states reserved for future transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Created,
    InProgress,
    Ended,
}

/// One hosted murder-mystery game.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    /// Opaque unique identifier, immutable after creation.
    pub id: Uuid,
    /// Identity of the creator; the sole authority for advancing the game.
    pub host: String,
    /// Player identities, append-only.
    pub players: Vec<String>,
    /// Lifecycle tag.
    pub status: GameStatus,
    /// Current round, starting at 1 and only ever incremented by the host.
    pub round: u32,
    /// Player identity → assigned character. Reserved state: nothing in the
    /// current operations mutates it.
    pub character_assignments: HashMap<String, String>,
    /// Act identifier → narrative text, populated by an external
    /// content-authoring process. Read-only from the request path.
    pub storyline: HashMap<String, String>,
}

impl Game {
    /// Creates a game in its initial state.
    #[must_use]
    pub fn new(id: Uuid, host: impl Into<String>) -> Self {
        Self {
            id,
            host: host.into(),
            players: Vec::new(),
            status: GameStatus::Created,
            round: 1,
            character_assignments: HashMap::new(),
            storyline: HashMap::new(),
        }
    }
}
