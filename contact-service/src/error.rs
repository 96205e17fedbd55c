use crate::dtos::{SubmissionKind, SubmissionResponse, ALL_FIELDS_REQUIRED};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;
use std::time::Duration;
use thiserror::Error;

/// Why a submission was not stored.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("one or more required fields are missing or empty")]
    MissingFields,

    #[error("store write failed: {0}")]
    Store(#[from] AppError),

    #[error("store write did not settle within {0:?}")]
    TimedOut(Duration),
}

impl SubmissionError {
    /// Outcome label for `form_submissions_total`.
    pub fn outcome(&self) -> &'static str {
        match self {
            SubmissionError::MissingFields => "invalid",
            SubmissionError::Store(_) | SubmissionError::TimedOut(_) => "failed",
        }
    }

    /// Caller-facing response. Store detail never leaves the process.
    pub fn into_response_for(self, kind: SubmissionKind) -> Response {
        match self {
            SubmissionError::MissingFields => (
                StatusCode::BAD_REQUEST,
                Json(SubmissionResponse::rejected(ALL_FIELDS_REQUIRED)),
            )
                .into_response(),
            SubmissionError::Store(_) | SubmissionError::TimedOut(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(kind.failed_response()),
            )
                .into_response(),
        }
    }
}
