use crate::error::SubmissionError;
use crate::models::{FormData, Message};
use async_trait::async_trait;
use service_core::error::AppError;
use std::future::Future;
use std::time::Duration;

/// Insert-only access to the two submission collections.
///
/// Implementations must refuse a record with an empty field, whatever the
/// caller checked beforehand.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Store a contact message, returning the id the store assigned.
    async fn insert_message(&self, message: &Message) -> Result<String, AppError>;

    /// Store a form submission, returning the id the store assigned.
    async fn insert_form_data(&self, form: &FormData) -> Result<String, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

/// Await a store write for at most `limit`.
pub async fn write_with_timeout<F>(limit: Duration, write: F) -> Result<String, SubmissionError>
where
    F: Future<Output = Result<String, AppError>>,
{
    match tokio::time::timeout(limit, write).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(SubmissionError::TimedOut(limit)),
    }
}
