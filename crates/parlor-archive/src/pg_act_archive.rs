//! `PostgreSQL` implementation of the `ActArchive` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use parlor_core::error::DomainError;

use crate::act::{ActArchive, RecordedAct};

/// PostgreSQL-backed act archive.
#[derive(Debug, Clone)]
pub struct PgActArchive {
    pool: PgPool,
}

impl PgActArchive {
    /// Creates a new `PgActArchive`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActArchive for PgActArchive {
    async fn record(&self, content: &str, recording: &str) -> Result<RecordedAct, DomainError> {
        let act = sqlx::query_as::<_, RecordedAct>(
            "INSERT INTO recorded_acts (content, recording)
             VALUES ($1, $2)
             RETURNING id, created_at, content, recording",
        )
        .bind(content)
        .bind(recording)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("act insert failed: {e}")))?;

        debug!(act_id = act.id, "recorded act stored");
        Ok(act)
    }
}
