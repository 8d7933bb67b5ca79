mod error;
mod id;
mod types;

pub use error::ValidationError;
pub use id::FeedbackId;
pub use types::{Feedback, FeedbackSubmission};
