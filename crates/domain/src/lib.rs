//! Website Directory Domain Types
//!
//! This crate provides the core domain model for the website directory: the
//! listing entity, its identifier, the partial records used to create and
//! patch listings, star votes with the running-mean rating formula, and the
//! error taxonomy shared by the other crates.
//!
//! ## Architecture
//!
//! - **identifiers**: Opaque string identifier for listings
//! - **listing**: The `Listing` entity, `NewListing` input and `ListingPatch` merges
//! - **rating**: Star votes and rating arithmetic
//! - **errors**: Error types with stable error codes
//!
//! ## Usage
//!
//! ```rust
//! use site_directory_domain::{apply_vote, StarVote};
//!
//! let vote = StarVote::new(5).unwrap();
//! let (rating, votes) = apply_vote(4.0, 3, vote);
//! assert_eq!(rating, 4.25);
//! assert_eq!(votes, 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod listing;
pub mod rating;

pub use errors::{AppError, AppResult, ListingError, RatingError, StoreError, ValidationError};
pub use identifiers::ListingId;
pub use listing::{Listing, ListingPatch, NewListing};
pub use rating::{apply_vote, StarVote, MAX_RATING, MIN_RATING};
