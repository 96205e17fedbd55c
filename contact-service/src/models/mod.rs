pub mod form_data;
pub mod message;

pub use form_data::{FormData, FORM_DATA_COLLECTION};
pub use message::{Message, MESSAGE_COLLECTION};
