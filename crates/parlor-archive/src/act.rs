//! The recorded-act entity and archive contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use parlor_core::error::DomainError;

/// One narrated act, immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct RecordedAct {
    /// Surrogate identifier assigned by the store.
    pub id: i64,
    /// Timestamp assigned at persistence time.
    pub created_at: DateTime<Utc>,
    /// The narrated storyline text.
    pub content: String,
    /// Reference to the synthesized audio.
    pub recording: String,
}

/// Insert-only store for recorded acts.
#[async_trait]
pub trait ActArchive: Send + Sync {
    /// Stores one `(content, recording)` pair and returns the stored record
    /// with its assigned `id` and `created_at`.
    async fn record(&self, content: &str, recording: &str) -> Result<RecordedAct, DomainError>;
}
