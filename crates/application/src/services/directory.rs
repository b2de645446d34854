//! Directory Service
//!
//! Use cases over the shared listing store. Read operations hand out owned
//! copies; nothing outside the store mutates a listing in place.

use crate::query::{sort_listings, ListingQuery, SortOrder};
use crate::seed::{BundledSeed, JsonFileSeed};
use crate::services::RatingSession;
use crate::store::{ListingStore, StoreHandle};
use crate::validation::{SubmitListingRequest, Validatable};
use serde::{Deserialize, Serialize};
use site_directory_common::config::DirectoryConfig;
use site_directory_domain::{
    apply_vote, AppResult, Listing, ListingId, ListingPatch, RatingError, StarVote,
};
use tracing::{debug, info, instrument, warn};

/// Number of listings in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Aggregates shown on the directory landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryOverview {
    pub featured: Vec<Listing>,
    pub popular: Vec<Listing>,
    pub recent: Vec<Listing>,
    pub total_listings: usize,
    pub total_categories: usize,
    pub total_views: u64,
    /// One entry per category, in category order
    pub category_counts: Vec<CategoryCount>,
}

/// Directory service over a shared store handle
#[derive(Debug, Clone)]
pub struct DirectoryService {
    store: StoreHandle,
    config: DirectoryConfig,
}

impl DirectoryService {
    pub fn new(store: StoreHandle, config: DirectoryConfig) -> Self {
        Self { store, config }
    }

    /// Build the store from the configured seed source
    pub fn from_config(config: DirectoryConfig) -> AppResult<Self> {
        let store = match &config.store.seed_path {
            Some(path) => ListingStore::from_seed(&JsonFileSeed::new(path))?,
            None => ListingStore::from_seed(&BundledSeed)?,
        };
        Ok(Self::new(StoreHandle::new(store), config))
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Validate a submission and add it to the directory
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub fn submit(&self, request: SubmitListingRequest) -> AppResult<Listing> {
        let validation = request.validate_all();
        if let Some(err) = validation.to_error() {
            warn!(error = %err, "submission rejected");
            return Err(err);
        }

        let input = request.into_new_listing(&self.config.store.placeholder_image);
        let listing = self.store.write(|store| store.create(input).clone())?;

        info!(id = %listing.id, category = %listing.category, "listing submitted");
        Ok(listing)
    }

    pub fn listing(&self, id: &ListingId) -> AppResult<Option<Listing>> {
        Ok(self.store.read(|store| store.get_by_id(id).cloned())?)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &ListingId, patch: ListingPatch) -> AppResult<Option<Listing>> {
        Ok(self.store.write(|store| store.update(id, patch).cloned())?)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: &ListingId) -> AppResult<Option<Listing>> {
        Ok(self.store.write(|store| store.delete(id))?)
    }

    /// Count one visit to the listing
    ///
    /// Every call counts; repeated visits are not deduplicated.
    #[instrument(skip(self))]
    pub fn record_visit(&self, id: &ListingId) -> AppResult<Option<Listing>> {
        Ok(self.store.write(|store| store.record_visit(id).cloned())?)
    }

    /// Fold a star vote into the listing's rating.
    ///
    /// Fails if the vote is outside `1..=5` or `session` already voted on this
    /// listing. Unknown ids yield `None` and leave the session unchanged.
    #[instrument(skip(self, session))]
    pub fn rate(
        &self,
        session: &mut RatingSession,
        id: &ListingId,
        vote: u8,
    ) -> AppResult<Option<Listing>> {
        let vote = StarVote::new(vote)?;
        if session.has_rated(id) {
            debug!("vote rejected, session already rated listing");
            return Err(RatingError::AlreadyRated(id.clone()).into());
        }

        let updated = self.store.write(|store| {
            let current = store.get_by_id(id)?;
            let (rating, votes) = apply_vote(current.rating, current.votes, vote);
            store
                .update(id, ListingPatch::new().rating(rating, votes))
                .cloned()
        })?;

        if let Some(listing) = &updated {
            session.record(id.clone(), vote);
            debug!(rating = listing.rating, votes = listing.votes, "vote applied");
        }
        Ok(updated)
    }

    /// Run a directory or search query
    #[instrument(skip(self))]
    pub fn browse(&self, query: &ListingQuery) -> AppResult<Vec<Listing>> {
        Ok(self.store.read(|store| owned(query.execute(store)))?)
    }

    /// Listings of one category, highest rated first unless `sort` says otherwise
    #[instrument(skip(self))]
    pub fn category_listings(
        &self,
        category: &str,
        sort: Option<SortOrder>,
    ) -> AppResult<Vec<Listing>> {
        Ok(self.store.read(|store| {
            let mut listings = store.list_by_category(category);
            sort_listings(&mut listings, sort.unwrap_or(SortOrder::Rating), None);
            owned(listings)
        })?)
    }

    pub fn categories(&self) -> AppResult<Vec<String>> {
        Ok(self.store.read(|store| store.categories().to_vec())?)
    }

    /// Landing page aggregates
    pub fn overview(&self) -> AppResult<DirectoryOverview> {
        let limits = &self.config.overview;
        Ok(self.store.read(|store| {
            let category_counts = store
                .categories()
                .iter()
                .map(|category| CategoryCount {
                    category: category.clone(),
                    count: store
                        .listings()
                        .iter()
                        .filter(|listing| &listing.category == category)
                        .count(),
                })
                .collect();

            DirectoryOverview {
                featured: first(store.list_featured(), limits.featured_limit),
                popular: first(store.list_popular(), limits.popular_limit),
                recent: first(store.list_recent(), limits.recent_limit),
                total_listings: store.len(),
                total_categories: store.categories().len(),
                total_views: store.total_views(),
                category_counts,
            }
        })?)
    }

    /// Other listings in exactly the same category, in collection order
    pub fn related(&self, id: &ListingId) -> AppResult<Vec<Listing>> {
        let limit = self.config.overview.related_limit;
        Ok(self.store.read(|store| {
            let Some(listing) = store.get_by_id(id) else {
                return Vec::new();
            };
            store
                .listings()
                .iter()
                .filter(|other| other.category == listing.category && other.id != listing.id)
                .take(limit)
                .cloned()
                .collect()
        })?)
    }
}

fn owned(listings: Vec<&Listing>) -> Vec<Listing> {
    listings.into_iter().cloned().collect()
}

fn first(listings: Vec<&Listing>, limit: usize) -> Vec<Listing> {
    listings.into_iter().take(limit).cloned().collect()
}
