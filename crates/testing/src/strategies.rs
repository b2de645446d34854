//! Proptest strategies for listings

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use site_directory_domain::{Listing, ListingId};

use crate::fixtures::TEST_CATEGORIES;

prop_compose! {
    /// A listing with arbitrary counters, category and age; `id` is a placeholder
    pub fn arb_listing()(
        category in prop::sample::select(TEST_CATEGORIES),
        title in "[A-Za-z][A-Za-z ]{0,15}",
        rating in 0.0f64..=5.0,
        votes in 0u32..1_000,
        views in 0u64..100_000,
        age_days in 0i64..1_000,
        featured in any::<bool>(),
    ) -> Listing {
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_else(Utc::now);
        Listing {
            id: ListingId::from("unassigned"),
            url: "https://example.com".to_string(),
            description: format!("{title} description"),
            title,
            category: category.to_string(),
            tags: Vec::new(),
            image: String::new(),
            rating,
            votes,
            views,
            featured,
            verified: false,
            date_added: epoch - Duration::days(age_days),
        }
    }
}

/// Between one and `max` listings with ids `p0..pN` in collection order
pub fn arb_listings(max: usize) -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec(arb_listing(), 1..=max.max(1)).prop_map(|listings| {
        listings
            .into_iter()
            .enumerate()
            .map(|(i, mut listing)| {
                listing.id = ListingId::from(format!("p{i}"));
                listing
            })
            .collect()
    })
}
