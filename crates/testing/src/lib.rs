//! Testing utilities for the site directory
//!
//! This crate provides:
//! - Fake-data fixtures for listings and submissions
//! - Builder patterns for listings with exact field values
//! - Property-based testing strategies
//!
//! # Examples
//!
//! ```
//! use site_directory_testing::{builders::*, fixtures::*};
//!
//! // A random listing
//! let listing = create_test_listing();
//! assert!(!listing.title.is_empty());
//!
//! // A listing with exact values
//! let listing = ListingBuilder::new()
//!     .with_id("a")
//!     .with_category("Design")
//!     .with_views(42)
//!     .build();
//! assert_eq!(listing.views, 42);
//! ```

pub mod builders;
pub mod fixtures;
pub mod strategies;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
