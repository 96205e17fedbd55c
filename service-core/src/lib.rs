//! service-core: shared plumbing for the form intake services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
