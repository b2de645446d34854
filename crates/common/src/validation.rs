//! Validation utilities.
//!
//! Format checks used by the submission form before anything reaches the
//! listing store. The store itself accepts whatever it is given.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://.+").unwrap());

/// Validate a website URL.
///
/// # Examples
///
/// ```
/// use site_directory_common::validation::validate_url;
///
/// assert!(validate_url("https://example.com").is_ok());
/// assert!(validate_url("http://localhost:8080").is_ok());
/// assert!(validate_url("example.com").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("Website URL is required".to_string());
    }

    if url.len() > 2048 {
        return Err("URL cannot be longer than 2048 characters".to_string());
    }

    if !URL_REGEX.is_match(url) {
        return Err("Please enter a valid URL starting with http:// or https://".to_string());
    }

    Ok(())
}

/// A string length outside its allowed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
    /// Fewer characters than `min`
    #[error("Value must be at least {min} characters long")]
    TooShort { min: usize },
    /// More characters than `max`
    #[error("Value cannot be longer than {max} characters")]
    TooLong { max: usize },
}

/// Validate a string length (in characters) is within a range.
///
/// # Examples
///
/// ```
/// use site_directory_common::validation::{validate_length, LengthError};
///
/// assert!(validate_length("hello", 1, 10).is_ok());
/// assert_eq!(validate_length("", 1, 10), Err(LengthError::TooShort { min: 1 }));
/// assert_eq!(validate_length("too long string", 1, 5), Err(LengthError::TooLong { max: 5 }));
/// ```
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), LengthError> {
    let len = value.chars().count();

    if len < min {
        return Err(LengthError::TooShort { min });
    }

    if len > max {
        return Err(LengthError::TooLong { max });
    }

    Ok(())
}

/// Split comma-separated tag text into tags.
///
/// Each tag is trimmed and empty entries are dropped. Order and duplicates
/// are kept.
///
/// # Examples
///
/// ```
/// use site_directory_common::validation::parse_tags;
///
/// assert_eq!(parse_tags(" design, ui ,,design"), vec!["design", "ui", "design"]);
/// assert!(parse_tags("  ").is_empty());
/// ```
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
