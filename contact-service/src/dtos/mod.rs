pub mod submissions;

pub use submissions::{
    ContactRequest, FormRequest, SubmissionKind, SubmissionRequest, SubmissionResponse,
    ALL_FIELDS_REQUIRED,
};
