//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `feedbackd_core::storage` using
//! DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use feedbackd_core::feedback::Feedback;
use feedbackd_core::storage::{FeedbackRepository, Result};

use super::conversions::feedback_to_item;
use super::error::map_put_item_error;

/// DynamoDB-based repository implementation.
///
/// Holds a shared SDK client constructed once at startup; the client is
/// safe for concurrent use across invocations.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl FeedbackRepository for DynamoDbRepository {
    async fn create_feedback(&self, feedback: &Feedback) -> Result<()> {
        let item = feedback_to_item(feedback);

        // Unconditional put: insert-or-replace by the `id` primary key.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}
