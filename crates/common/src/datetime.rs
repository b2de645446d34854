//! DateTime utilities.

use chrono::{DateTime, Utc};

/// Get the current UTC time.
///
/// Stamps `date_added` on newly created listings.
///
/// # Examples
///
/// ```
/// use site_directory_common::datetime::now_utc;
///
/// let now = now_utc();
/// println!("Current time: {}", now);
/// ```
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
