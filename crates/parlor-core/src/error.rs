//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No game is registered under the given identifier.
    #[error("game not found: {0}")]
    GameNotFound(Uuid),

    /// The caller is not the host of the game it tried to mutate.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A required input was missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The external generation or synthesis provider failed. The payload is
    /// the provider's diagnostic text, carried opaquely.
    #[error("provider error: {0}")]
    Provider(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
