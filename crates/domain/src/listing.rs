//! Listing types for the website directory domain.

use crate::identifiers::ListingId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single website-directory entry
///
/// Field names serialise in camelCase so seed files keep the record shape
/// used by the directory front end (`dateAdded`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique within the store
    pub id: ListingId,
    /// Display name
    pub title: String,
    /// Website address
    pub url: String,
    /// Short summary shown on cards
    pub description: String,
    /// Free-form category name, compared case-insensitively by views
    pub category: String,
    /// Insertion order preserved, duplicates permitted
    #[serde(default)]
    pub tags: Vec<String>,
    /// Preview image URL
    #[serde(default)]
    pub image: String,
    /// Mean of all votes received, in `[0, 5]`
    #[serde(default)]
    pub rating: f64,
    /// Number of votes folded into `rating`
    #[serde(default)]
    pub votes: u32,
    /// Visits recorded
    #[serde(default)]
    pub views: u64,
    /// Shown in the featured section
    #[serde(default)]
    pub featured: bool,
    /// Checked by a moderator
    #[serde(default)]
    pub verified: bool,
    /// Creation time; never changes afterwards
    pub date_added: DateTime<Utc>,
}

impl Listing {
    /// Build a fresh listing from caller input.
    ///
    /// Counters start at zero and both moderation flags start unset; the
    /// caller-supplied fields are taken as-is.
    pub fn from_new(id: ListingId, input: NewListing, date_added: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            url: input.url,
            description: input.description,
            category: input.category,
            tags: input.tags,
            image: input.image,
            rating: 0.0,
            votes: 0,
            views: 0,
            featured: false,
            verified: false,
            date_added,
        }
    }

    /// Merge the fields present in `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: ListingPatch) {
        let ListingPatch {
            title,
            url,
            description,
            category,
            tags,
            image,
            rating,
            votes,
            views,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(image) = image {
            self.image = image;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(votes) = votes {
            self.votes = votes;
        }
        if let Some(views) = views {
            self.views = views;
        }
    }

    /// Case-insensitive exact comparison against `category`
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Whether `needle` occurs in the title, description, category or any tag.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Whether the lower-cased `needle` occurs in the title alone
    pub fn title_matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

/// Caller-supplied fields for a new listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewListing {
    /// Display name
    pub title: String,
    /// Website address
    pub url: String,
    /// Short summary shown on cards
    pub description: String,
    /// Category name
    pub category: String,
    /// Tags in entry order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Preview image URL
    #[serde(default)]
    pub image: String,
}

/// Partial update for an existing listing
///
/// `id` and `date_added` are immutable and have no counterpart here, nor do
/// the moderation flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPatch {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New website address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// New summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Replacement tag list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New preview image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// New mean rating; set together with `votes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// New vote count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
    /// New view count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

impl ListingPatch {
    /// An empty patch that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the url
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the tags
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Set the image
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set both halves of the running mean together
    pub fn rating(mut self, rating: f64, votes: u32) -> Self {
        self.rating = Some(rating);
        self.votes = Some(votes);
        self
    }

    /// Set the view counter
    pub fn views(mut self, views: u64) -> Self {
        self.views = Some(views);
        self
    }

    /// Whether applying this patch could change the derived category set
    pub fn touches_category(&self) -> bool {
        self.category.is_some()
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
