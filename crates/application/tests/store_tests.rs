//! Tests for the listing store
//!
//! Covers creation, updates, deletion, the derived category set and the
//! ranked views.

use site_directory_application::{BundledSeed, ListingStore, StoreHandle};
use site_directory_domain::{ListingId, ListingPatch, StoreError};
use site_directory_testing::{builders::*, fixtures::*};

fn store_of(listings: Vec<site_directory_domain::Listing>) -> ListingStore {
    ListingStore::with_listings(listings).expect("unique ids")
}

fn ids(listings: &[&site_directory_domain::Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.to_string()).collect()
}

#[test]
fn test_create_zeroes_counters_and_flags() {
    // Arrange
    let mut store = ListingStore::new();
    let input = NewListingBuilder::new().with_title("Fresh Site").build();

    // Act
    let created = store.create(input).clone();

    // Assert
    assert_eq!(created.rating, 0.0);
    assert_eq!(created.votes, 0);
    assert_eq!(created.views, 0);
    assert!(!created.featured);
    assert!(!created.verified);
    assert_eq!(store.get_by_id(&created.id), Some(&created));
}

#[test]
fn test_create_prepends_to_seed_collection() {
    let mut store = ListingStore::from_seed(&BundledSeed).unwrap();
    let created = store.create(create_test_new_listing()).clone();

    assert_eq!(store.len(), 11);
    assert_eq!(store.listings()[0].id, created.id);
    assert_eq!(store.listings()[1].id.as_str(), "1");
}

#[test]
fn test_duplicate_seed_ids_rejected() {
    let a = ListingBuilder::new().with_id("dup").build();
    let b = ListingBuilder::new().with_id("dup").with_title("Other").build();

    let result = ListingStore::with_listings(vec![a, b]);
    assert!(result.is_err());
}

#[test]
fn test_delete_removes_from_all_views() {
    // Arrange
    let mut store = store_of(vec![
        ListingBuilder::new()
            .with_id("a")
            .with_title("Design Hub")
            .with_category("Design")
            .build(),
        ListingBuilder::new()
            .with_id("b")
            .with_title("Design Notes")
            .with_category("Design")
            .build(),
    ]);
    let id = ListingId::from("a");

    // Act
    let removed = store.delete(&id);

    // Assert
    assert_eq!(removed.map(|l| l.id), Some(id.clone()));
    assert!(store.get_by_id(&id).is_none());
    assert!(store.list_by_category("design").iter().all(|l| l.id != id));
    assert!(store.search("design").iter().all(|l| l.id != id));
    assert!(store.delete(&id).is_none());
}

#[test]
fn test_update_category_refreshes_categories() {
    // Arrange
    let mut store = store_of(vec![
        ListingBuilder::new().with_id("a").with_category("Design").build(),
        ListingBuilder::new().with_id("b").with_category("Education").build(),
    ]);

    // Act
    store.update(&ListingId::from("a"), ListingPatch::new().category("NewCat"));

    // Assert
    assert_eq!(store.categories(), &["NewCat".to_string(), "Education".to_string()]);
}

#[test]
fn test_update_category_keeps_shared_category() {
    let mut store = store_of(vec![
        ListingBuilder::new().with_id("a").with_category("Design").build(),
        ListingBuilder::new().with_id("b").with_category("Design").build(),
    ]);

    store.update(&ListingId::from("a"), ListingPatch::new().category("NewCat"));

    assert!(store.categories().contains(&"NewCat".to_string()));
    assert!(store.categories().contains(&"Design".to_string()));
}

#[test]
fn test_update_unknown_id_is_noop() {
    let mut store = store_of(create_test_listings(3));
    let before = store.listings().to_vec();

    let result = store.update(&ListingId::from("missing"), ListingPatch::new().title("X"));

    assert!(result.is_none());
    assert_eq!(store.listings(), before.as_slice());
}

#[test]
fn test_update_preserves_identity_fields() {
    let original = ListingBuilder::new().with_id("a").featured().build();
    let mut store = store_of(vec![original.clone()]);

    let updated = store
        .update(&ListingId::from("a"), ListingPatch::new().title("Renamed").views(99))
        .cloned()
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.date_added, original.date_added);
    assert!(updated.featured);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.views, 99);
}

#[test]
fn test_search_unions_title_tag_and_category_matches() {
    // Arrange
    let store = store_of(vec![
        ListingBuilder::new().with_id("title").with_title("Design Tool").build(),
        ListingBuilder::new()
            .with_id("tag")
            .with_title("Palette")
            .with_tags(["design"])
            .build(),
        ListingBuilder::new()
            .with_id("category")
            .with_title("Sketchbook")
            .with_category("DESIGN")
            .build(),
        ListingBuilder::new()
            .with_id("other")
            .with_title("Planner")
            .with_category("Productivity")
            .build(),
    ]);

    // Act
    let results = store.search("design");

    // Assert
    assert_eq!(ids(&results), vec!["title", "tag", "category"]);
}

#[test]
fn test_search_blank_query_matches_nothing() {
    let store = store_of(create_test_listings(5));
    assert!(store.search("").is_empty());
    assert!(store.search("   ").is_empty());
}

#[test]
fn test_search_ignores_surrounding_whitespace() {
    let store = ListingStore::from_seed(&BundledSeed).unwrap();

    let padded = store.search("  Design ");
    let plain = store.search("design");

    assert_eq!(ids(&padded), vec!["1", "5", "10"]);
    assert_eq!(ids(&padded), ids(&plain));
}

#[test]
fn test_list_by_category_ignores_case() {
    let store = ListingStore::from_seed(&BundledSeed).unwrap();

    let design = store.list_by_category("design");

    assert_eq!(ids(&design), vec!["1", "5", "10"]);
    assert!(store.list_by_category("unknown").is_empty());
}

#[test]
fn test_list_popular_orders_by_views() {
    // Arrange
    let store = store_of(vec![
        ListingBuilder::new().with_id("A").with_views(10).build(),
        ListingBuilder::new().with_id("B").with_views(50).build(),
        ListingBuilder::new().with_id("C").with_views(30).build(),
    ]);

    // Act / Assert
    assert_eq!(ids(&store.list_popular()), vec!["B", "C", "A"]);
}

#[test]
fn test_list_popular_is_stable_for_ties() {
    let store = store_of(vec![
        ListingBuilder::new().with_id("first").with_views(5).build(),
        ListingBuilder::new().with_id("top").with_views(9).build(),
        ListingBuilder::new().with_id("second").with_views(5).build(),
    ]);

    assert_eq!(ids(&store.list_popular()), vec!["top", "first", "second"]);
}

#[test]
fn test_list_recent_is_stable_for_ties() {
    let same_day = default_date_added();
    let store = store_of(vec![
        ListingBuilder::new().with_id("x").with_date_added(same_day).build(),
        ListingBuilder::new().with_id("y").with_date_added(same_day).build(),
    ]);

    assert_eq!(ids(&store.list_recent()), vec!["x", "y"]);
}

#[test]
fn test_bundled_seed_views() {
    let store = ListingStore::from_seed(&BundledSeed).unwrap();

    assert_eq!(ids(&store.list_featured()), vec!["1", "2", "3", "8"]);
    assert_eq!(store.list_popular()[0].id.as_str(), "3");
    assert_eq!(store.list_recent()[0].id.as_str(), "1");
    assert_eq!(store.total_views(), 140_320);
    assert_eq!(
        store.categories(),
        &[
            "Design".to_string(),
            "Productivity".to_string(),
            "Development".to_string(),
            "Photography".to_string(),
            "Marketing".to_string(),
            "Education".to_string(),
        ]
    );
}

#[test]
fn test_record_visit_increments_views() {
    let mut store = store_of(vec![ListingBuilder::new().with_id("a").with_views(7).build()]);

    store.record_visit(&ListingId::from("a"));
    let listing = store.record_visit(&ListingId::from("a")).unwrap();

    assert_eq!(listing.views, 9);
    assert!(store.record_visit(&ListingId::from("missing")).is_none());
}

#[test]
fn test_handle_shares_one_store() {
    let handle = StoreHandle::new(ListingStore::new());
    let other = handle.clone();

    handle
        .write(|store| store.create(create_test_new_listing()).id.clone())
        .unwrap();

    assert_eq!(other.read(|store| store.len()).unwrap(), 1);
}

#[test]
fn test_uninitialized_handle_faults() {
    let handle = StoreHandle::uninitialized();

    assert_eq!(handle.read(|store| store.len()), Err(StoreError::NotInitialized));

    handle.install(ListingStore::new()).unwrap();
    assert_eq!(handle.read(|store| store.len()), Ok(0));
    assert_eq!(
        handle.install(ListingStore::new()),
        Err(StoreError::AlreadyInitialized)
    );
}
