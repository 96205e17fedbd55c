use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const FORM_DATA_COLLECTION: &str = "formdatas";

/// A general form submission; a contact message plus a phone number.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl FormData {
    pub const REQUIRED_FIELDS: &'static [&'static str] =
        &["firstName", "lastName", "phone", "email", "message"];

    pub fn new(
        first_name: String,
        last_name: String,
        phone: String,
        email: String,
        message: String,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            phone,
            email,
            message,
        }
    }
}
