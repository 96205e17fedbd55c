pub mod contact;
pub mod form;
pub mod health;
pub mod metrics;

pub use contact::submit_contact;
pub use form::submit_form;
pub use health::{health_check, readiness_check};
pub use metrics::metrics_endpoint;

use crate::dtos::SubmissionKind;
use crate::error::SubmissionError;
use crate::services::record_submission;
use axum::response::Response;

/// Answer a request that passed extraction but still lacks a field.
pub(crate) fn reject_incomplete(kind: SubmissionKind) -> Response {
    let err = SubmissionError::MissingFields;
    tracing::warn!(form = kind.label(), "Validation failed: missing required fields");
    record_submission(kind, err.outcome());
    err.into_response_for(kind)
}
