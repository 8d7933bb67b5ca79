//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use feedbackd_core::feedback::{Feedback, FeedbackId};
use feedbackd_core::storage::{FeedbackRepository, Result};

/// In-memory storage backend for local runs and testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<FeedbackId, Feedback>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    /// Note: Only used in tests.
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns a stored record by id.
    /// Note: Only used in tests.
    #[allow(dead_code)]
    pub async fn get(&self, id: &FeedbackId) -> Option<Feedback> {
        self.records.read().await.get(id).cloned()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryRepository {
    async fn create_feedback(&self, feedback: &Feedback) -> Result<()> {
        let mut records = self.records.write().await;
        // Insert-or-replace by id, mirroring the unconditional store write.
        records.insert(feedback.id.clone(), feedback.clone());
        Ok(())
    }
}
