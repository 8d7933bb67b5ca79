use async_trait::async_trait;

use crate::feedback::Feedback;

use super::Result;

/// Repository for feedback record persistence.
///
/// The only operation is a single write: records are never read back,
/// updated, or deleted by this system. Implementations must be safe to
/// share across concurrent invocations.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persists a feedback record, replacing any record with the same id.
    ///
    /// Insert-or-replace semantics by primary key: no read-before-write,
    /// no conditional put, no transaction.
    async fn create_feedback(&self, feedback: &Feedback) -> Result<()>;
}
