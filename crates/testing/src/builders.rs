//! Fluent builders for test listings.
//!
//! Defaults are fixed values so assertions can rely on them; override only
//! the fields a test cares about.

use chrono::{DateTime, TimeZone, Utc};
use site_directory_domain::{Listing, ListingId, NewListing};

/// Timestamp used when a test does not set `date_added`
pub fn default_date_added() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Builder for `Listing` test instances
#[derive(Clone)]
pub struct ListingBuilder {
    listing: Listing,
}

impl ListingBuilder {
    pub fn new() -> Self {
        Self {
            listing: Listing {
                id: ListingId::from("test-listing"),
                title: "Test Listing".to_string(),
                url: "https://example.com".to_string(),
                description: "A listing created for tests".to_string(),
                category: "Testing".to_string(),
                tags: Vec::new(),
                image: String::new(),
                rating: 0.0,
                votes: 0,
                views: 0,
                featured: false,
                verified: false,
                date_added: default_date_added(),
            },
        }
    }

    pub fn with_id(mut self, id: impl Into<ListingId>) -> Self {
        self.listing.id = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.listing.title = title.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.listing.url = url.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.listing.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.listing.category = category.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listing.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.listing.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f64, votes: u32) -> Self {
        self.listing.rating = rating;
        self.listing.votes = votes;
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.listing.views = views;
        self
    }

    pub fn with_date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.listing.date_added = date_added;
        self
    }

    pub fn featured(mut self) -> Self {
        self.listing.featured = true;
        self
    }

    pub fn verified(mut self) -> Self {
        self.listing.verified = true;
        self
    }

    pub fn build(self) -> Listing {
        self.listing
    }
}

impl Default for ListingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `NewListing` inputs to `create`
#[derive(Clone)]
pub struct NewListingBuilder {
    input: NewListing,
}

impl NewListingBuilder {
    pub fn new() -> Self {
        Self {
            input: NewListing {
                title: "New Listing".to_string(),
                url: "https://example.org".to_string(),
                description: "A freshly submitted listing".to_string(),
                category: "Testing".to_string(),
                tags: Vec::new(),
                image: String::new(),
            },
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.input.title = title.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.input.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.input.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> NewListing {
        self.input
    }
}

impl Default for NewListingBuilder {
    fn default() -> Self {
        Self::new()
    }
}
