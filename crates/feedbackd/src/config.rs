use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store table targeted by feedback writes (default: "feedback")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FEEDBACK_TABLE_NAME` - DynamoDB table for feedback records (default: "feedback")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("FEEDBACK_TABLE_NAME").unwrap_or_else(|_| "feedback".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
