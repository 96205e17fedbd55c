use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MESSAGE_COLLECTION: &str = "messages";

/// A message left through the contact form. Stored once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl Message {
    /// Stored field names, in document order.
    pub const REQUIRED_FIELDS: &'static [&'static str] =
        &["firstName", "lastName", "email", "message"];

    pub fn new(first_name: String, last_name: String, email: String, message: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn ada() -> Message {
        Message::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            "Hello".to_string(),
        )
    }

    #[test]
    fn serializes_with_camel_case_keys_and_no_id() {
        let document = bson::to_document(&ada()).unwrap();
        let keys: Vec<&str> = document.keys().map(String::as_str).collect();
        assert_eq!(keys, Message::REQUIRED_FIELDS);
    }

    #[test]
    fn empty_field_fails_validation() {
        let mut message = ada();
        message.email = String::new();
        assert!(message.validate().is_err());
        assert!(ada().validate().is_ok());
    }
}
