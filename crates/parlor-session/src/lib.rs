//! Parlor — game session bounded context.
//!
//! Owns the authoritative mapping of game identifiers to game state and
//! enforces host-only mutation.

pub mod domain;
pub mod registry;

pub use domain::{Game, GameStatus};
pub use registry::{GameRegistry, STORYLINE_NOT_FOUND};
