use axum::{
    extract::{FromRequest, Request},
    response::Response,
    Json,
};

use crate::dtos::{SubmissionKind, SubmissionRequest};
use crate::error::SubmissionError;
use crate::services::record_submission;
use validator::Validate;

/// JSON body extractor for the submission endpoints.
///
/// Anything short of a JSON object with every required field present and
/// non-empty is rejected with the uniform 400 payload, before the handler
/// runs. That includes unreadable bodies and a missing content type.
pub struct SubmissionJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for SubmissionJson<T>
where
    T: SubmissionRequest + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = T::KIND;

        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!(
                form = kind.label(),
                error = %e,
                "Rejected unreadable submission body"
            );
            reject(kind)
        })?;

        if let Err(e) = value.validate() {
            tracing::warn!(
                form = kind.label(),
                error = %e,
                "Validation failed: missing required fields"
            );
            return Err(reject(kind));
        }

        Ok(SubmissionJson(value))
    }
}

fn reject(kind: SubmissionKind) -> Response {
    let err = SubmissionError::MissingFields;
    record_submission(kind, err.outcome());
    err.into_response_for(kind)
}
