use crate::dtos::{FormRequest, SubmissionKind};
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

/// `POST /submit-form`
pub async fn submit_form(
    State(state): State<AppState>,
    SubmissionJson(request): SubmissionJson<FormRequest>,
) -> Response {
    let kind = SubmissionKind::Form;
    tracing::debug!(
        first_name = ?request.first_name,
        last_name = ?request.last_name,
        phone = ?request.phone,
        email = ?request.email,
        "Received form submission"
    );

    let Some(form) = request.into_form_data() else {
        return reject_incomplete(kind);
    };

    match write_with_timeout(state.write_timeout, state.store.insert_form_data(&form)).await {
        Ok(id) => {
            tracing::info!(form_id = %id, "Form data saved successfully");
            record_submission(kind, "saved");
            (StatusCode::OK, Json(kind.saved_response())).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to save form submission");
            record_submission(kind, err.outcome());
            err.into_response_for(kind)
        }
    }
}
