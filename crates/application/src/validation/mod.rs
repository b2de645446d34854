//! Validation Framework
//!
//! Checks user input before it reaches the listing store. The store performs
//! no validation of its own.

mod listing;

pub use listing::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use site_directory_common::validation as rules;
use site_directory_domain::{AppError, ValidationError};
use validator::Validate;

/// Validation result containing all errors
///
/// Field errors keep the order in which they were reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether validation passed
    pub valid: bool,
    /// Field-level errors
    pub field_errors: IndexMap<String, Vec<String>>,
    /// Object-level errors
    pub object_errors: Vec<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            field_errors: IndexMap::new(),
            object_errors: Vec::new(),
        }
    }

    /// Create a failed validation result with a single error
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            field_errors: IndexMap::new(),
            object_errors: vec![message.into()],
        }
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Add an object-level error
    pub fn add_object_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.object_errors.push(message.into());
    }

    /// Merge another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }

        for (field, errors) in other.field_errors {
            self.field_errors.entry(field).or_default().extend(errors);
        }

        self.object_errors.extend(other.object_errors);
    }

    /// Errors reported for `field`
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.field_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Convert to an error if invalid
    pub fn to_error(&self) -> Option<AppError> {
        if self.valid {
            return None;
        }

        let mut messages = Vec::new();

        for (field, errors) in &self.field_errors {
            for error in errors {
                messages.push(format!("{}: {}", field, error));
            }
        }

        messages.extend(self.object_errors.clone());

        Some(ValidationError::Multiple(messages).into())
    }

    /// Ensure validation passed, returning error if not
    pub fn ensure_valid(&self) -> Result<(), AppError> {
        match self.to_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Trait for validatable types
pub trait Validatable {
    /// Validate the type and return a result
    fn validate_all(&self) -> ValidationResult;
}

/// Extension to convert validator errors to our format
pub trait ValidatorExt {
    fn to_validation_result(&self) -> ValidationResult;
}

impl<T: Validate> ValidatorExt for T {
    fn to_validation_result(&self) -> ValidationResult {
        match self.validate() {
            Ok(_) => ValidationResult::success(),
            Err(errors) => {
                let mut result = ValidationResult::success();

                for (field, field_errors) in errors.field_errors() {
                    for error in field_errors {
                        let message = error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| error.code.to_string());
                        result.add_field_error(field.to_string(), message);
                    }
                }

                result
            }
        }
    }
}

/// Common validation rules
pub struct ValidationRules;

impl ValidationRules {
    /// Fail when `value` is blank
    pub fn validate_required(value: &str, field: &str, message: &str) -> ValidationResult {
        let mut result = ValidationResult::success();
        if value.trim().is_empty() {
            result.add_field_error(field, message);
        }
        result
    }

    /// Validate a website URL
    pub fn validate_url(url: &str, field: &str) -> ValidationResult {
        let mut result = ValidationResult::success();
        if let Err(message) = rules::validate_url(url) {
            result.add_field_error(field, message);
        }
        result
    }
}
