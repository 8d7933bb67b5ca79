//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting feedback records into DynamoDB items.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::SecondsFormat;

use feedbackd_core::feedback::Feedback;

/// Convert a Feedback record to a DynamoDB item.
///
/// Attribute names use the wire-format casing (`createdAt`); `id` is the
/// table's primary key. The timestamp is ISO 8601 UTC with millisecond
/// precision and a `Z` suffix.
pub fn feedback_to_item(feedback: &Feedback) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::S(feedback.id.to_string()));
    item.insert(
        "name".to_string(),
        AttributeValue::S(feedback.name.clone()),
    );
    item.insert(
        "email".to_string(),
        AttributeValue::S(feedback.email.clone()),
    );
    item.insert(
        "message".to_string(),
        AttributeValue::S(feedback.message.clone()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(
            feedback
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
    );

    item
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::DateTime;
    use feedbackd_core::feedback::FeedbackSubmission;
    use serde_json::json;

    fn sample_feedback() -> Feedback {
        Feedback::new(FeedbackSubmission {
            name: Some(json!("Ann")),
            email: Some(json!("a@x.com")),
            message: Some(json!("Hi")),
        })
        .unwrap()
    }

    fn get_s<'a>(item: &'a HashMap<String, AttributeValue>, key: &str) -> &'a str {
        item.get(key)
            .and_then(|v| v.as_s().ok())
            .map(String::as_str)
            .unwrap_or_else(|| panic!("missing string attribute {key}"))
    }

    #[test]
    fn test_item_carries_all_record_fields() {
        let feedback = sample_feedback();
        let item = feedback_to_item(&feedback);

        assert_eq!(get_s(&item, "id"), feedback.id.as_str());
        assert_eq!(get_s(&item, "name"), "Ann");
        assert_eq!(get_s(&item, "email"), "a@x.com");
        assert_eq!(get_s(&item, "message"), "Hi");
        assert_eq!(item.len(), 5);
    }

    #[test]
    fn test_created_at_is_iso8601_utc() {
        let item = feedback_to_item(&sample_feedback());
        let created_at = get_s(&item, "createdAt");

        assert!(created_at.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
    }
}
