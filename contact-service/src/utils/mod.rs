pub mod validation;

pub use validation::SubmissionJson;
