//! Shared Module
//!
//! Types that are independent of the HTTP layer: the application
//! configuration and input validation errors.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
