//! Seed data providers.
//!
//! A seed provider supplies the initial, ordered listings a store starts
//! with. Listings are taken as-is, including their counters and flags.

use site_directory_domain::{AppResult, Listing, ListingError};
use std::path::{Path, PathBuf};
use tracing::debug;

const BUNDLED_LISTINGS: &str = include_str!("../data/listings.json");

/// Source of the initial listing collection
pub trait SeedProvider {
    /// Load the listings in collection order
    fn load(&self) -> AppResult<Vec<Listing>>;
}

/// The sample dataset compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSeed;

impl SeedProvider for BundledSeed {
    fn load(&self) -> AppResult<Vec<Listing>> {
        parse_listings(BUNDLED_LISTINGS, "bundled dataset")
    }
}

/// A JSON array of listings read from disk
#[derive(Debug, Clone)]
pub struct JsonFileSeed {
    path: PathBuf,
}

impl JsonFileSeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeedProvider for JsonFileSeed {
    fn load(&self) -> AppResult<Vec<Listing>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            ListingError::Seed(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        parse_listings(&raw, &self.path.display().to_string())
    }
}

/// Listings already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSeed {
    listings: Vec<Listing>,
}

impl StaticSeed {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }
}

impl SeedProvider for StaticSeed {
    fn load(&self) -> AppResult<Vec<Listing>> {
        Ok(self.listings.clone())
    }
}

fn parse_listings(raw: &str, source: &str) -> AppResult<Vec<Listing>> {
    let listings: Vec<Listing> = serde_json::from_str(raw)
        .map_err(|e| ListingError::Seed(format!("invalid listings in {}: {}", source, e)))?;
    debug!(source, count = listings.len(), "seed listings parsed");
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_directory_domain::AppError;

    #[test]
    fn test_bundled_seed_parses() {
        let listings = BundledSeed.load().unwrap();
        assert_eq!(listings.len(), 10);
        assert_eq!(listings[0].id.as_str(), "1");
        assert!(listings.iter().any(|l| l.featured));
    }

    #[test]
    fn test_static_seed_keeps_order() {
        let listings = BundledSeed.load().unwrap().into_iter().rev().collect::<Vec<_>>();
        let loaded = StaticSeed::new(listings).load().unwrap();
        assert_eq!(loaded[0].id.as_str(), "10");
    }

    #[test]
    fn test_missing_file_is_seed_error() {
        let err = JsonFileSeed::new("/nonexistent/listings.json")
            .load()
            .unwrap_err();
        assert!(matches!(err, AppError::Listing(ListingError::Seed(_))));
    }

    #[test]
    fn test_malformed_json_is_seed_error() {
        let err = parse_listings("[{\"id\": 1}]", "inline").unwrap_err();
        assert!(matches!(err, AppError::Listing(ListingError::Seed(_))));
    }
}
