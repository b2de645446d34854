//! Common utilities shared by the website directory crates.
//!
//! This crate provides:
//! - Configuration management
//! - Tracing setup
//! - DateTime helpers
//! - Input-format validators used by the submission form

pub mod config;
pub mod datetime;
pub mod telemetry;
pub mod validation;

// Re-export commonly used types
pub use config::{DirectoryConfig, OverviewConfig, StoreConfig, TelemetryConfig};
pub use datetime::now_utc;
pub use telemetry::init_tracing;
pub use validation::{parse_tags, validate_length, validate_url, LengthError};

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
