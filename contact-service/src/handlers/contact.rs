use crate::dtos::{ContactRequest, SubmissionKind};
use crate::handlers::reject_incomplete;
use crate::services::{record_submission, write_with_timeout};
use crate::startup::AppState;
use crate::utils::SubmissionJson;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<AppState>,
    SubmissionJson(request): SubmissionJson<ContactRequest>,
) -> Response {
    let kind = SubmissionKind::Contact;
    tracing::debug!(
        first_name = ?request.first_name,
        last_name = ?request.last_name,
        email = ?request.email,
        "Received contact submission"
    );

    let Some(message) = request.into_message() else {
        return reject_incomplete(kind);
    };

    match write_with_timeout(state.write_timeout, state.store.insert_message(&message)).await {
        Ok(id) => {
            tracing::info!(message_id = %id, "Message saved successfully");
            record_submission(kind, "saved");
            (StatusCode::OK, Json(kind.saved_response())).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to save contact message");
            record_submission(kind, err.outcome());
            err.into_response_for(kind)
        }
    }
}
