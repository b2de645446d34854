//! Test fixtures for generating listings with realistic data.

use chrono::{Duration, Utc};
use fake::{
    faker::{
        company::en::{Buzzword, CompanyName},
        lorem::en::{Sentence, Words},
    },
    Fake,
};
use site_directory_domain::{Listing, ListingId, NewListing};

use crate::builders::default_date_added;

/// Categories fixtures draw from
pub const TEST_CATEGORIES: &[&str] = &[
    "Design",
    "Productivity",
    "Development",
    "Photography",
    "Marketing",
    "Education",
];

/// Create a listing with random content
pub fn create_test_listing() -> Listing {
    let category = TEST_CATEGORIES[(0..TEST_CATEGORIES.len()).fake::<usize>()];
    create_test_listing_in(category)
}

/// Create a random listing in `category`
pub fn create_test_listing_in(category: &str) -> Listing {
    let title: String = CompanyName().fake();
    let slug: String = title
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();

    Listing {
        id: ListingId::generate(),
        url: format!("https://{slug}.example.com"),
        title,
        description: Sentence(6..14).fake(),
        category: category.to_string(),
        tags: Words(1..4).fake(),
        image: format!("https://images.example.com/{slug}.png"),
        rating: (0.0..5.0).fake::<f64>(),
        votes: (0..500).fake(),
        views: (0..50_000).fake(),
        featured: false,
        verified: (0..2).fake::<u8>() == 1,
        date_added: Utc::now() - Duration::days((0..365).fake::<i64>()),
    }
}

/// Create `count` listings with ids `listing-0..count`, newest first
pub fn create_test_listings(count: usize) -> Vec<Listing> {
    let base = default_date_added();
    (0..count)
        .map(|i| {
            let mut listing = create_test_listing_in(TEST_CATEGORIES[i % TEST_CATEGORIES.len()]);
            listing.id = ListingId::from(format!("listing-{i}"));
            listing.date_added = base - Duration::days(i as i64);
            listing
        })
        .collect()
}

/// Create a random submission payload
pub fn create_test_new_listing() -> NewListing {
    let title: String = CompanyName().fake();
    NewListing {
        url: format!("https://{}.example.net", Buzzword().fake::<String>().to_lowercase()),
        title,
        description: Sentence(6..14).fake(),
        category: TEST_CATEGORIES[0].to_string(),
        tags: Words(1..3).fake(),
        image: String::new(),
    }
}
