//! Listing submission validation rules

use super::{Validatable, ValidationResult, ValidationRules, ValidatorExt};
use serde::{Deserialize, Serialize};
use site_directory_common::validation::{parse_tags, validate_length, LengthError};
use site_directory_domain::NewListing;
use validator::Validate;

/// A website submission as entered in the submission form
///
/// `tags` holds the raw comma-separated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SubmitListingRequest {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    pub url: String,
    #[validate(custom = "validate_description_length")]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl SubmitListingRequest {
    pub const MIN_TITLE_LENGTH: usize = 3;
    pub const MIN_DESCRIPTION_LENGTH: usize = 20;
    pub const MAX_DESCRIPTION_LENGTH: usize = 500;

    /// Convert into store input, splitting tags and filling in the image
    pub fn into_new_listing(self, placeholder_image: &str) -> NewListing {
        let image = self
            .image
            .filter(|image| !image.trim().is_empty())
            .unwrap_or_else(|| placeholder_image.to_string());

        NewListing {
            tags: parse_tags(&self.tags),
            title: self.title,
            url: self.url,
            description: self.description,
            category: self.category,
            image,
        }
    }
}

fn validate_description_length(description: &str) -> Result<(), validator::ValidationError> {
    validate_length(
        description,
        SubmitListingRequest::MIN_DESCRIPTION_LENGTH,
        SubmitListingRequest::MAX_DESCRIPTION_LENGTH,
    )
    .map_err(|err| {
        let message = match err {
            LengthError::TooShort { .. } => "Description must be at least 20 characters",
            LengthError::TooLong { .. } => "Description must not exceed 500 characters",
        };
        let mut error = validator::ValidationError::new("length");
        error.message = Some(message.into());
        error
    })
}

impl Validatable for SubmitListingRequest {
    fn validate_all(&self) -> ValidationResult {
        let mut result = ValidationResult::success();
        let derived = self.to_validation_result();

        // A blank required field reports only that it is required.
        let required = [
            ("title", &self.title, "Website title is required"),
            ("url", &self.url, "Website URL is required"),
            ("description", &self.description, "Description is required"),
            ("category", &self.category, "Please select a category"),
        ];

        for (field, value, message) in required {
            let presence = ValidationRules::validate_required(value, field, message);
            if !presence.valid {
                result.merge(presence);
                continue;
            }

            if field == "url" {
                result.merge(ValidationRules::validate_url(value, field));
            }
            for error in derived.errors_for(field) {
                result.add_field_error(field, error.clone());
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitListingRequest {
        SubmitListingRequest {
            title: "Excalidraw".to_string(),
            url: "https://excalidraw.com".to_string(),
            description: "Virtual whiteboard for sketching hand-drawn diagrams".to_string(),
            category: "Design".to_string(),
            tags: "whiteboard, diagrams, ,sketch".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_valid_request() {
        let result = valid_request().validate_all();
        assert!(result.valid, "{:?}", result);
    }

    #[test]
    fn test_blank_fields_report_required_only() {
        let request = SubmitListingRequest::default();
        let result = request.validate_all();

        assert!(!result.valid);
        assert_eq!(result.errors_for("title"), ["Website title is required"]);
        assert_eq!(result.errors_for("url"), ["Website URL is required"]);
        assert_eq!(result.errors_for("description"), ["Description is required"]);
        assert_eq!(result.errors_for("category"), ["Please select a category"]);
    }

    #[test]
    fn test_length_rules() {
        let mut request = valid_request();
        request.title = "ab".to_string();
        request.description = "too short".to_string();
        let result = request.validate_all();

        assert_eq!(result.errors_for("title"), ["Title must be at least 3 characters"]);
        assert_eq!(
            result.errors_for("description"),
            ["Description must be at least 20 characters"]
        );

        let mut request = valid_request();
        request.description = "x".repeat(501);
        let result = request.validate_all();
        assert_eq!(
            result.errors_for("description"),
            ["Description must not exceed 500 characters"]
        );
    }

    #[test]
    fn test_description_length_bounds_are_inclusive() {
        let mut request = valid_request();
        request.description = "é".repeat(SubmitListingRequest::MIN_DESCRIPTION_LENGTH);
        assert!(request.validate_all().errors_for("description").is_empty());

        request.description = "é".repeat(SubmitListingRequest::MAX_DESCRIPTION_LENGTH);
        assert!(request.validate_all().errors_for("description").is_empty());

        request.description = "é".repeat(SubmitListingRequest::MIN_DESCRIPTION_LENGTH - 1);
        assert_eq!(
            request.validate_all().errors_for("description"),
            ["Description must be at least 20 characters"]
        );
    }

    #[test]
    fn test_url_rule() {
        let mut request = valid_request();
        request.url = "excalidraw.com".to_string();
        let result = request.validate_all();
        assert_eq!(result.errors_for("url").len(), 1);
        assert!(result.errors_for("title").is_empty());
    }

    #[test]
    fn test_into_new_listing() {
        let listing = valid_request().into_new_listing("https://img.example/placeholder.png");
        assert_eq!(listing.tags, vec!["whiteboard", "diagrams", "sketch"]);
        assert_eq!(listing.image, "https://img.example/placeholder.png");

        let mut request = valid_request();
        request.image = Some("https://img.example/own.png".to_string());
        assert_eq!(
            request.into_new_listing("unused").image,
            "https://img.example/own.png"
        );
    }
}
