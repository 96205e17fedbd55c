//! contact-service: accepts contact and general form submissions over HTTP
//! and stores each one as a document in MongoDB.
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;
