//! Error types for the website directory domain.
//!
//! "Not found" is deliberately absent: lookups return `Option` or empty
//! collections. What remains are programmer faults (using the store before it
//! exists), bad seed data, rejected votes and rejected submissions.

use crate::identifiers::ListingId;

/// Top-level application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Store lifecycle errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Listing collection errors
    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),

    /// Rating errors
    #[error("Rating error: {0}")]
    Rating(#[from] RatingError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Store(_) => "STORE_ERROR",
            Self::Listing(_) => "LISTING_ERROR",
            Self::Rating(_) => "RATING_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Whether this is a programming fault rather than bad input.
    ///
    /// Faults are not recoverable by the caller retrying with other input.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::Store(_) | Self::Listing(ListingError::DuplicateId(_))
        )
    }
}

/// Store lifecycle errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store was accessed before one was installed
    #[error("listing store accessed before initialization")]
    NotInitialized,

    /// A store was installed into a handle that already holds one
    #[error("listing store already initialized")]
    AlreadyInitialized,
}

/// Listing collection errors
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// Two listings share an id
    #[error("Duplicate listing id: {0}")]
    DuplicateId(ListingId),

    /// Seed data could not be loaded
    #[error("Seed data unavailable: {0}")]
    Seed(String),
}

/// Rating errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RatingError {
    /// Vote outside the star range
    #[error("Vote out of range: {0} not in [1, 5]")]
    InvalidVote(u8),

    /// The session already voted on this listing
    #[error("Listing already rated in this session: {0}")]
    AlreadyRated(ListingId),
}

/// Validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Field validation failed
    #[error("Field validation failed: {field} - {message}")]
    FieldValidation {
        /// Name of the offending field
        field: String,
        /// Human-readable reason
        message: String,
    },

    /// Multiple validation errors
    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<String>),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
