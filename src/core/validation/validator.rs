//! Whole-form validation entry point

use super::check::{ValidationPolicy, Violation, check_field};
use crate::core::form::Form;
use serde::Serialize;

/// A field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidField {
    /// Position of the field in the form
    pub index: usize,
    pub name: String,
    pub violation: Violation,
}

impl InvalidField {
    pub fn message(&self) -> &'static str {
        self.violation.message()
    }
}

/// Runs the single-field check over a form
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validate every field of the form
    ///
    /// Returns the failing fields in document order (empty when the form is
    /// valid) and focuses the first one.
    pub fn validate(&self, form: &mut Form) -> Vec<InvalidField> {
        let indices: Vec<usize> = (0..form.len()).collect();
        self.validate_only(form, &indices)
    }

    /// Validate a subset of the form's fields
    ///
    /// Indices are visited in document order whatever order they are given
    /// in; duplicates and out-of-range indices are ignored.
    pub fn validate_only(&self, form: &mut Form, indices: &[usize]) -> Vec<InvalidField> {
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        let mut invalid = Vec::new();
        for index in indices {
            let Some(field) = form.field(index) else {
                continue;
            };
            if !field.kind.is_validated() {
                continue;
            }
            let name = field.name.clone();

            if let Some(violation) = check_field(form, index, self.policy) {
                invalid.push(InvalidField {
                    index,
                    name,
                    violation,
                });
            }
        }

        if let Some(first) = invalid.first() {
            form.focus(first.index);
            tracing::debug!(
                failed = invalid.len(),
                first = %first.name,
                "form validation failed"
            );
        }

        invalid
    }
}

/// Validate a form with the default policy
pub fn validate(form: &mut Form) -> Vec<InvalidField> {
    Validator::new().validate(form)
}
