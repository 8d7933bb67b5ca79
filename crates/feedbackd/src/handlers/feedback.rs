//! Feedback submission endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use feedbackd_core::feedback::{Feedback, FeedbackId, FeedbackSubmission};

use crate::state::AppState;

const INVALID_JSON: &str = "Invalid JSON body";
const MISSING_FIELDS: &str = "name, email, and message are required";
const SAVE_FAILED: &str = "Failed to save feedback";

/// Success body for a persisted submission.
#[derive(Debug, Serialize)]
struct SubmitFeedbackResponse {
    ok: bool,
    id: FeedbackId,
}

/// Error body shared by all failure paths.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Submit a feedback record (POST /api/feedback).
///
/// An absent body is treated as an empty JSON object, so it fails field
/// validation rather than JSON parsing. Validation performs no type
/// checking: any non-empty field value is accepted, and email syntax is
/// deliberately not checked. At most one store write is attempted, and
/// only after validation passes.
#[axum::debug_handler]
pub async fn submit_feedback(State(state): State<AppState>, body: Bytes) -> Response {
    let submission: FeedbackSubmission = if body.is_empty() {
        FeedbackSubmission::default()
    } else {
        match serde_json::from_slice::<serde_json::Value>(&body) {
            // A parseable body that is not an object carries none of the
            // required fields.
            Ok(value) => serde_json::from_value(value).unwrap_or_default(),
            Err(err) => {
                tracing::debug!(error = %err, "Rejected unparseable feedback body");
                return error_response(StatusCode::BAD_REQUEST, INVALID_JSON);
            }
        }
    };

    let feedback = match Feedback::new(submission) {
        Ok(feedback) => feedback,
        Err(err) => {
            tracing::debug!(error = %err, "Rejected incomplete feedback submission");
            return error_response(StatusCode::BAD_REQUEST, MISSING_FIELDS);
        }
    };

    match state.feedback_repo.create_feedback(&feedback).await {
        Ok(()) => {
            tracing::info!(feedback_id = %feedback.id, "Stored feedback submission");
            (
                StatusCode::CREATED,
                Json(SubmitFeedbackResponse {
                    ok: true,
                    id: feedback.id,
                }),
            )
                .into_response()
        }
        Err(err) => {
            // Detail goes to the log only; callers get a generic message.
            tracing::error!(feedback_id = %feedback.id, error = %err, "Failed to store feedback");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, SAVE_FAILED)
        }
    }
}
