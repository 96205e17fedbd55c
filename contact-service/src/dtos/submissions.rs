use crate::models::{FormData, Message};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The one rejection message, whichever field was missing.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";

/// Which endpoint a submission came through. Decides the wording and shape of
/// the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact,
    Form,
}

impl SubmissionKind {
    /// Metric and log label.
    pub fn label(self) -> &'static str {
        match self {
            SubmissionKind::Contact => "contact",
            SubmissionKind::Form => "form",
        }
    }

    pub fn saved_response(self) -> SubmissionResponse {
        match self {
            SubmissionKind::Contact => SubmissionResponse::saved("Message saved successfully!"),
            SubmissionKind::Form => SubmissionResponse::saved("Form submitted successfully"),
        }
    }

    /// Existing callers of `/submit-form` read the failure text from
    /// `message`, not `error`.
    pub fn failed_response(self) -> SubmissionResponse {
        match self {
            SubmissionKind::Contact => SubmissionResponse::rejected("Failed to save message"),
            SubmissionKind::Form => SubmissionResponse {
                success: false,
                message: Some("Failed to submit form".to_string()),
                error: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResponse {
    pub fn saved(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
        }
    }

    pub fn rejected(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

/// A request body accepted by one of the submission endpoints.
pub trait SubmissionRequest: DeserializeOwned + Validate + Send {
    const KIND: SubmissionKind;
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(required, length(min = 1))]
    pub first_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub last_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl SubmissionRequest for ContactRequest {
    const KIND: SubmissionKind = SubmissionKind::Contact;
}

impl ContactRequest {
    /// Build the record to store. `None` if any field is absent.
    pub fn into_message(self) -> Option<Message> {
        Some(Message::new(
            self.first_name?,
            self.last_name?,
            self.email?,
            self.message?,
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormRequest {
    #[validate(required, length(min = 1))]
    pub first_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub last_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl SubmissionRequest for FormRequest {
    const KIND: SubmissionKind = SubmissionKind::Form;
}

impl FormRequest {
    pub fn into_form_data(self) -> Option<FormData> {
        Some(FormData::new(
            self.first_name?,
            self.last_name?,
            self.phone?,
            self.email?,
            self.message?,
        ))
    }
}
