//! Typed errors for the formcheck crate
//!
//! Validation failures are *not* errors: a field that breaks one of its rules
//! produces a [`Violation`](crate::core::validation::Violation) and an inline
//! annotation. The types here cover programming and configuration mistakes.
//!
//! # Error Categories
//!
//! - [`FormError`]: malformed markup or rule declarations, unknown fields
//! - [`SortError`]: the element reordering utility refused to move nodes

use thiserror::Error;

/// Errors raised while building or reading a form
#[derive(Debug, Error)]
pub enum FormError {
    /// The DOM `type` string is not one of the recognized input kinds
    #[error("Unknown field type '{0}'")]
    UnknownFieldType(String),

    /// A `valid.*` declaration could not be parsed
    #[error("Invalid rule '{attribute}' on field '{field}': {message}")]
    InvalidRule {
        field: String,
        attribute: String,
        message: String,
    },

    /// A regex handed to the rule builder does not compile
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// No field with the given name exists in the form
    #[error("Field '{0}' not found")]
    UnknownField(String),

    /// Serializing extracted values failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FormError {
    /// Shorthand for an [`FormError::InvalidRule`]
    pub fn invalid_rule(
        field: impl Into<String>,
        attribute: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        FormError::InvalidRule {
            field: field.into(),
            attribute: attribute.into(),
            message: message.to_string(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::UnknownFieldType(_) => "UNKNOWN_FIELD_TYPE",
            FormError::InvalidRule { .. } => "INVALID_RULE",
            FormError::InvalidPattern { .. } => "INVALID_PATTERN",
            FormError::UnknownField(_) => "UNKNOWN_FIELD",
            FormError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

// =============================================================================
// Sort Errors
// =============================================================================

/// Errors raised by [`sort_elements`](crate::core::sort::sort_elements)
///
/// All of them are detected before any node moves, so a failed sort leaves
/// the tree untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// One sortable node contains another, relative order is undefined
    #[error("You can't sort elements if any one is a descendant of another")]
    DescendantConflict,

    /// A sortable node has no parent to be placed into
    #[error("Element has no parent and cannot be reordered")]
    Detached,

    /// The same node was selected for sorting twice
    #[error("Element selected more than once for sorting")]
    Duplicate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rule_display() {
        let err = FormError::invalid_rule("age", "valid.min", "not a number");
        let display = err.to_string();
        assert!(display.contains("age"));
        assert!(display.contains("valid.min"));
        assert!(display.contains("not a number"));
    }

    #[test]
    fn test_unknown_field_type_display() {
        let err = FormError::UnknownFieldType("file".to_string());
        assert_eq!(err.to_string(), "Unknown field type 'file'");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FormError::UnknownField("x".to_string()).error_code(),
            "UNKNOWN_FIELD"
        );
        assert_eq!(
            FormError::UnknownFieldType("file".to_string()).error_code(),
            "UNKNOWN_FIELD_TYPE"
        );
        assert_eq!(
            FormError::invalid_rule("a", "b", "c").error_code(),
            "INVALID_RULE"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FormError = json_err.into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_sort_error_display() {
        assert!(
            SortError::DescendantConflict
                .to_string()
                .contains("descendant of another")
        );
    }
}
