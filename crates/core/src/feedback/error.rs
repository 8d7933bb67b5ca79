use thiserror::Error;

/// Errors that can occur when validating a feedback submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name, email, and message are required")]
    MissingFields,
}
