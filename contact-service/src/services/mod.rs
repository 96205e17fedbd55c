pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoStore;
pub use memory::{InMemoryStore, StoreMode};
pub use metrics::{get_metrics, init_metrics, record_submission};
pub use store::{write_with_timeout, SubmissionStore};
