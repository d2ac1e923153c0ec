//! Shared utilities, configuration, and error handling for Corkboard
//!
//! This crate provides common functionality used across the Corkboard application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Custom axum extractors
//! - Secret comparison seam

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod secret;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use secret::verify_secret;
