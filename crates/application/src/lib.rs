//! Application layer for the site directory
//!
//! Holds the in-memory listing store and the use cases built on it.
//!
//! ## Modules
//!
//! - `store` - The listing collection, its derived views, and the shared handle
//! - `query` - Sort orders and browse/search queries
//! - `seed` - Where the initial collection comes from
//! - `services` - Submission, rating, visit and overview use cases
//! - `validation` - Input validation framework

pub mod query;
pub mod seed;
pub mod services;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use query::{sort_listings, ListingQuery, SortOrder};
pub use seed::{BundledSeed, JsonFileSeed, SeedProvider, StaticSeed};
pub use services::{CategoryCount, DirectoryOverview, DirectoryService, RatingSession};
pub use store::{ListingStore, StoreHandle};
pub use validation::{
    SubmitListingRequest, Validatable, ValidationResult, ValidationRules, ValidatorExt,
};
