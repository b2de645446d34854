//! Listing Store
//!
//! The authoritative in-memory collection of listings. The collection is kept
//! most-recent-first: `create` prepends, seed data keeps the order it was
//! supplied in. Every query preserves collection order unless it is a ranked
//! view, and ranked views sort stably so ties keep collection order.
//!
//! The distinct category set is re-derived from the collection after every
//! mutation rather than maintained incrementally.

use crate::query::{sort_listings, SortOrder};
use crate::seed::SeedProvider;
use indexmap::IndexSet;
use parking_lot::RwLock;
use site_directory_common::datetime::now_utc;
use site_directory_domain::{
    AppResult, Listing, ListingError, ListingId, ListingPatch, NewListing, StoreError,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info};

/// In-memory repository owning every listing
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    listings: Vec<Listing>,
    categories: Vec<String>,
}

impl ListingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `listings` in the given order.
    ///
    /// Fails if two listings share an id.
    pub fn with_listings(listings: Vec<Listing>) -> AppResult<Self> {
        {
            let mut seen = HashSet::with_capacity(listings.len());
            for listing in &listings {
                if !seen.insert(&listing.id) {
                    return Err(ListingError::DuplicateId(listing.id.clone()).into());
                }
            }
        }

        let mut store = Self {
            listings,
            categories: Vec::new(),
        };
        store.refresh_categories();
        Ok(store)
    }

    /// Create a store from a seed data provider
    pub fn from_seed<S: SeedProvider + ?Sized>(seed: &S) -> AppResult<Self> {
        let listings = seed.load()?;
        let store = Self::with_listings(listings)?;
        info!(
            listings = store.len(),
            categories = store.categories.len(),
            "listing store seeded"
        );
        Ok(store)
    }

    /// Number of listings held
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// All listings in collection order
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Add a new listing at the front of the collection.
    ///
    /// The store assigns the id and timestamp and zeroes the counters; the
    /// input fields are stored unvalidated.
    pub fn create(&mut self, input: NewListing) -> &Listing {
        let mut id = ListingId::generate();
        while self.position(&id).is_some() {
            id = ListingId::generate();
        }

        let listing = Listing::from_new(id, input, now_utc());
        debug!(id = %listing.id, category = %listing.category, "listing created");

        self.listings.insert(0, listing);
        self.refresh_categories();
        &self.listings[0]
    }

    /// Merge `patch` into the listing with `id`.
    ///
    /// Unknown ids are a no-op and yield `None`.
    pub fn update(&mut self, id: &ListingId, patch: ListingPatch) -> Option<&Listing> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "update ignored, listing not found");
            return None;
        };

        let touches_category = patch.touches_category();
        self.listings[index].apply(patch);
        if touches_category {
            self.refresh_categories();
        }
        debug!(id = %id, "listing updated");

        Some(&self.listings[index])
    }

    /// Remove the listing with `id`, returning it if it existed
    pub fn delete(&mut self, id: &ListingId) -> Option<Listing> {
        let index = self.position(id)?;
        let removed = self.listings.remove(index);
        self.refresh_categories();
        debug!(id = %id, "listing deleted");
        Some(removed)
    }

    /// Increment the view counter of the listing with `id` by one
    pub fn record_visit(&mut self, id: &ListingId) -> Option<&Listing> {
        let index = self.position(id)?;
        let listing = &mut self.listings[index];
        listing.views = listing.views.saturating_add(1);
        debug!(id = %id, views = listing.views, "visit recorded");
        Some(&self.listings[index])
    }

    pub fn get_by_id(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    /// Listings whose category equals `category`, ignoring case
    pub fn list_by_category(&self, category: &str) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| listing.in_category(category))
            .collect()
    }

    /// Case-insensitive substring search over title, description, category
    /// and tags.
    ///
    /// A blank query matches nothing. Surrounding whitespace is ignored.
    pub fn search(&self, query: &str) -> Vec<&Listing> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.listings
            .iter()
            .filter(|listing| listing.matches_text(&needle))
            .collect()
    }

    pub fn list_featured(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|listing| listing.featured).collect()
    }

    /// Every listing by views, most viewed first
    pub fn list_popular(&self) -> Vec<&Listing> {
        let mut listings: Vec<&Listing> = self.listings.iter().collect();
        sort_listings(&mut listings, SortOrder::Views, None);
        listings
    }

    /// Every listing by date added, newest first
    pub fn list_recent(&self) -> Vec<&Listing> {
        let mut listings: Vec<&Listing> = self.listings.iter().collect();
        sort_listings(&mut listings, SortOrder::Recent, None);
        listings
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Sum of views across all listings
    pub fn total_views(&self) -> u64 {
        self.listings
            .iter()
            .fold(0u64, |total, listing| total.saturating_add(listing.views))
    }

    fn position(&self, id: &ListingId) -> Option<usize> {
        self.listings.iter().position(|listing| &listing.id == id)
    }

    fn refresh_categories(&mut self) {
        let distinct: IndexSet<&str> = self
            .listings
            .iter()
            .map(|listing| listing.category.as_str())
            .collect();
        self.categories = distinct.into_iter().map(str::to_string).collect();
    }
}

/// Shared handle to the single listing store.
///
/// Consumers receive clones of the handle. A handle may be created empty and
/// given its store later; any access before that is an initialization fault
/// and fails with [`StoreError::NotInitialized`].
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Arc<RwLock<Option<ListingStore>>>,
}

impl StoreHandle {
    /// Wrap an existing store
    pub fn new(store: ListingStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(store))),
        }
    }

    /// A handle with no store behind it yet
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Install the store behind an empty handle
    pub fn install(&self, store: ListingStore) -> Result<(), StoreError> {
        let mut slot = self.inner.write();
        if slot.is_some() {
            return Err(StoreError::AlreadyInitialized);
        }
        *slot = Some(store);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Run `f` against the store with shared access
    pub fn read<R>(&self, f: impl FnOnce(&ListingStore) -> R) -> Result<R, StoreError> {
        match self.inner.read().as_ref() {
            Some(store) => Ok(f(store)),
            None => {
                error!("listing store read before initialization");
                Err(StoreError::NotInitialized)
            }
        }
    }

    /// Run `f` against the store with exclusive access
    pub fn write<R>(&self, f: impl FnOnce(&mut ListingStore) -> R) -> Result<R, StoreError> {
        match self.inner.write().as_mut() {
            Some(store) => Ok(f(store)),
            None => {
                error!("listing store written before initialization");
                Err(StoreError::NotInitialized)
            }
        }
    }
}
