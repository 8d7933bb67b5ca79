//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses a repository trait object for storage
//! abstraction and supports different backends via feature flags.

use std::sync::Arc;

use feedbackd_core::storage::FeedbackRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. The repository is constructed once at
/// startup and shared for the process lifetime; handlers keep no
/// per-request state.
#[derive(Clone)]
pub struct AppState {
    /// Feedback repository backing the submission endpoint.
    pub feedback_repo: Arc<dyn FeedbackRepository>,
}

impl AppState {
    /// Creates an AppState over an existing repository.
    pub fn with_repository(feedback_repo: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback_repo }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for local runs and testing without external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// The SDK client is built once here from the default credential
        /// chain and reused across invocations.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let repo = DynamoDbRepository::new(client, config.table_name.clone());

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
