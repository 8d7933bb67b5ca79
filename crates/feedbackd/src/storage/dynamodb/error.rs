//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `feedbackd_core::storage`.
//! The mapped detail is logged by callers, never surfaced on the wire.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use feedbackd_core::storage::RepositoryError;

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::WriteFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::WriteFailed("Throughput exceeded".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::WriteFailed("Request limit exceeded".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::WriteFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::WriteFailed(format!("PutItem failed: {:?}", err)),
    }
}
