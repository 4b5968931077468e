//! In-memory `ActArchive` implementation for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use parlor_archive::{ActArchive, RecordedAct};
use parlor_core::error::DomainError;

/// An act archive backed by a vector. Ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct InMemoryActArchive {
    acts: Mutex<Vec<RecordedAct>>,
}

impl InMemoryActArchive {
    /// Creates an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all stored acts.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn acts(&self) -> Vec<RecordedAct> {
        self.acts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActArchive for InMemoryActArchive {
    async fn record(&self, content: &str, recording: &str) -> Result<RecordedAct, DomainError> {
        let mut acts = self.acts.lock().unwrap();
        let act = RecordedAct {
            id: i64::try_from(acts.len()).unwrap() + 1,
            created_at: Utc::now(),
            content: content.to_string(),
            recording: recording.to_string(),
        };
        acts.push(act.clone());
        Ok(act)
    }
}
