//! Property-based tests for store invariants

use proptest::prelude::*;
use site_directory_application::ListingStore;
use site_directory_testing::{builders::NewListingBuilder, strategies::arb_listings};
use std::collections::HashSet;

proptest! {
    #[test]
    fn prop_created_ids_are_unique(count in 1usize..40) {
        let mut store = ListingStore::new();
        for i in 0..count {
            store.create(NewListingBuilder::new().with_title(format!("Site {i}")).build());
        }

        let ids: HashSet<_> = store.listings().iter().map(|l| l.id.clone()).collect();
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn prop_popular_is_stable_descending(listings in arb_listings(30)) {
        let store = ListingStore::with_listings(listings).unwrap();
        let position = |id: &str| store.listings().iter().position(|l| l.id.as_str() == id);

        let popular = store.list_popular();
        prop_assert_eq!(popular.len(), store.len());
        for pair in popular.windows(2) {
            prop_assert!(pair[0].views >= pair[1].views);
            if pair[0].views == pair[1].views {
                prop_assert!(position(pair[0].id.as_str()) < position(pair[1].id.as_str()));
            }
        }
    }

    #[test]
    fn prop_recent_is_stable_descending(listings in arb_listings(30)) {
        let store = ListingStore::with_listings(listings).unwrap();
        let position = |id: &str| store.listings().iter().position(|l| l.id.as_str() == id);

        for pair in store.list_recent().windows(2) {
            prop_assert!(pair[0].date_added >= pair[1].date_added);
            if pair[0].date_added == pair[1].date_added {
                prop_assert!(position(pair[0].id.as_str()) < position(pair[1].id.as_str()));
            }
        }
    }

    #[test]
    fn prop_categories_match_collection(listings in arb_listings(30)) {
        let store = ListingStore::with_listings(listings).unwrap();

        let expected: HashSet<&str> = store.listings().iter().map(|l| l.category.as_str()).collect();
        let actual: HashSet<&str> = store.categories().iter().map(String::as_str).collect();
        prop_assert_eq!(store.categories().len(), expected.len());
        prop_assert_eq!(actual, expected);
    }
}
