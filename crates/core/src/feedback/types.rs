use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FeedbackId, ValidationError};

/// A feedback submission as received on the wire.
///
/// Fields hold raw JSON values: validation performs no type checking, so a
/// number or boolean is as acceptable as a string and is persisted through
/// its string rendering. Unknown fields are ignored and never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackSubmission {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

/// A persisted feedback record.
///
/// Records are write-once: after a successful store write they are never
/// read back, updated, or deleted by this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: FeedbackId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Builds a record from a submission, generating the id and stamping
    /// the creation time.
    ///
    /// Returns [`ValidationError::MissingFields`] when any of `name`,
    /// `email`, or `message` is absent or empty. "Empty" follows JSON
    /// truthiness: `null`, `""`, `false`, and `0` all count as missing.
    /// Anything else is accepted as-is; there are no length limits and no
    /// email syntax checks.
    pub fn new(submission: FeedbackSubmission) -> Result<Self, ValidationError> {
        let (Some(name), Some(email), Some(message)) = (
            present(submission.name),
            present(submission.email),
            present(submission.message),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        Ok(Self {
            id: FeedbackId::generate(),
            name,
            email,
            message,
            created_at: Utc::now(),
        })
    }
}

/// Reduces a raw JSON field to its stored string form, or `None` when the
/// value counts as missing.
fn present(value: Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(name: &str, email: &str, message: &str) -> FeedbackSubmission {
        FeedbackSubmission {
            name: Some(json!(name)),
            email: Some(json!(email)),
            message: Some(json!(message)),
        }
    }

    #[test]
    fn test_complete_submission_builds_record() {
        let feedback = Feedback::new(submission("Ann", "a@x.com", "Hi")).unwrap();

        assert_eq!(feedback.name, "Ann");
        assert_eq!(feedback.email, "a@x.com");
        assert_eq!(feedback.message, "Hi");
        assert!(!feedback.id.as_str().is_empty());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let incomplete = FeedbackSubmission {
            name: Some(json!("Ann")),
            email: Some(json!("a@x.com")),
            message: None,
        };

        assert_eq!(
            Feedback::new(incomplete),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_empty_field_counts_as_missing() {
        assert_eq!(
            Feedback::new(submission("Ann", "", "Hi")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_empty_submission_is_rejected() {
        assert_eq!(
            Feedback::new(FeedbackSubmission::default()),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_non_string_values_are_accepted() {
        // No type checking: any non-empty value passes and is stored
        // through its string rendering.
        let odd = FeedbackSubmission {
            name: Some(json!(5)),
            email: Some(json!(true)),
            message: Some(json!({"nested": "value"})),
        };

        let feedback = Feedback::new(odd).unwrap();
        assert_eq!(feedback.name, "5");
        assert_eq!(feedback.email, "true");
        assert_eq!(feedback.message, r#"{"nested":"value"}"#);
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        for falsy in [json!(null), json!(false), json!(0), json!("")] {
            let incomplete = FeedbackSubmission {
                name: Some(falsy.clone()),
                email: Some(json!("a@x.com")),
                message: Some(json!("Hi")),
            };

            assert_eq!(
                Feedback::new(incomplete),
                Err(ValidationError::MissingFields),
                "{falsy}"
            );
        }
    }

    #[test]
    fn test_whitespace_only_field_is_accepted() {
        // Validation is exactly "non-empty"; whitespace is not trimmed.
        assert!(Feedback::new(submission("Ann", " ", "Hi")).is_ok());
    }

    #[test]
    fn test_email_syntax_is_not_validated() {
        assert!(Feedback::new(submission("Ann", "not-an-email", "Hi")).is_ok());
    }

    #[test]
    fn test_record_serializes_with_camel_case_timestamp() {
        let feedback = Feedback::new(submission("Ann", "a@x.com", "Hi")).unwrap();
        let json = serde_json::to_value(&feedback).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_unknown_wire_fields_are_ignored() {
        let submission: FeedbackSubmission = serde_json::from_str(
            r#"{"name":"Ann","email":"a@x.com","message":"Hi","admin":true}"#,
        )
        .unwrap();

        assert!(Feedback::new(submission).is_ok());
    }
}
