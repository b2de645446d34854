//! Sorting and filtering of listing views.
//!
//! Every comparator is applied with a stable sort, so listings with equal
//! keys keep their collection order.

use crate::store::ListingStore;
use serde::{Deserialize, Serialize};
use site_directory_domain::{Listing, ValidationError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to a listing view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Highest rating first
    Rating,
    /// Most viewed first
    Views,
    /// Newest first
    Recent,
    /// Title A to Z
    Alphabetical,
    /// Title matches of the search text before other matches
    Relevance,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[
            Self::Relevance,
            Self::Rating,
            Self::Views,
            Self::Recent,
            Self::Alphabetical,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Views => "views",
            Self::Recent => "recent",
            Self::Alphabetical => "alphabetical",
            Self::Relevance => "relevance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rating => "Highest Rated",
            Self::Views => "Most Viewed",
            Self::Recent => "Recently Added",
            Self::Alphabetical => "Alphabetical",
            Self::Relevance => "Relevance",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(Self::Rating),
            "views" => Ok(Self::Views),
            "recent" => Ok(Self::Recent),
            "alphabetical" => Ok(Self::Alphabetical),
            "relevance" => Ok(Self::Relevance),
            other => Err(ValidationError::FieldValidation {
                field: "sort".to_string(),
                message: format!("Unknown sort order '{}'", other),
            }),
        }
    }
}

/// Sort `listings` in place.
///
/// `query` only matters for [`SortOrder::Relevance`]; without one, relevance
/// leaves the order untouched.
pub fn sort_listings(listings: &mut [&Listing], order: SortOrder, query: Option<&str>) {
    match order {
        SortOrder::Rating => listings.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOrder::Views => listings.sort_by(|a, b| b.views.cmp(&a.views)),
        SortOrder::Recent => listings.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        SortOrder::Alphabetical => listings.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOrder::Relevance => {
            let Some(needle) = query.map(|q| q.trim().to_lowercase()) else {
                return;
            };
            if needle.is_empty() {
                return;
            }
            listings.sort_by_cached_key(|listing| !listing.title_matches(&needle));
        }
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// A filtered, sorted view over the store
///
/// With `text` set this is a search; otherwise it is the whole directory.
/// `category` narrows either one. The default sort is relevance for
/// searches and rating for browsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

impl ListingQuery {
    /// Browse the whole directory
    pub fn browse() -> Self {
        Self::default()
    }

    /// Free-text search
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// The sort that will be applied
    pub fn effective_sort(&self) -> SortOrder {
        self.sort.unwrap_or(if self.text.is_some() {
            SortOrder::Relevance
        } else {
            SortOrder::Rating
        })
    }

    /// Run the query against `store`
    pub fn execute<'a>(&self, store: &'a ListingStore) -> Vec<&'a Listing> {
        let mut results: Vec<&Listing> = match &self.text {
            Some(text) => store.search(text),
            None => store.listings().iter().collect(),
        };

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            results.retain(|listing| listing.in_category(category));
        }

        sort_listings(&mut results, self.effective_sort(), self.text.as_deref());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("rating".parse::<SortOrder>().unwrap(), SortOrder::Rating);
        assert_eq!(" Views ".parse::<SortOrder>().unwrap(), SortOrder::Views);
        assert_eq!("recent".parse::<SortOrder>().unwrap(), SortOrder::Recent);
        assert_eq!(
            "alphabetical".parse::<SortOrder>().unwrap(),
            SortOrder::Alphabetical
        );
        assert_eq!("relevance".parse::<SortOrder>().unwrap(), SortOrder::Relevance);
        assert!("newest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_order_round_trips_through_str() {
        for order in SortOrder::all() {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), *order);
        }
    }

    #[test]
    fn test_compare_titles_folds_case() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Apple", "apple"), Ordering::Less);
    }

    #[test]
    fn test_effective_sort_defaults() {
        assert_eq!(ListingQuery::browse().effective_sort(), SortOrder::Rating);
        assert_eq!(ListingQuery::search("x").effective_sort(), SortOrder::Relevance);
        assert_eq!(
            ListingQuery::search("x").sorted_by(SortOrder::Views).effective_sort(),
            SortOrder::Views
        );
    }
}
