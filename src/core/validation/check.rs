//! Single-field rule evaluation
//!
//! Rules run in a fixed order and the first failure wins:
//! required → pattern → range → password match.

use crate::core::field::{Field, FieldKind};
use crate::core::form::Form;
use crate::core::message::{Annotation, FieldMessages};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// Empty value, or no member of the group checked
    Required,
    /// Value does not match the declared regex
    Pattern,
    /// Text or password length outside the range
    Length,
    /// Number outside the range, or not a number at all
    Value,
    /// Checked count of a checkbox group outside the range
    Selection,
    /// Value differs from the referenced password field
    PasswordMismatch,
}

impl Violation {
    /// The message rendered next to the field's label
    pub fn message(&self) -> &'static str {
        match self {
            Violation::Required => "required",
            Violation::Pattern | Violation::Value => "invalid value",
            Violation::Length => "invalid length",
            Violation::Selection => "invalid selection",
            Violation::PasswordMismatch => "passwords not match",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// How messages of grouped controls are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Clear a checkbox or radio group's message before checking it
    ///
    /// Off by default: the group message then stays until a member
    /// declaring `required` passes, so a member passing only other rules
    /// does not erase a failure reported by its group.
    pub clear_grouped_first: bool,
}

/// Evaluate a field's rules without touching the form
pub fn evaluate(form: &Form, field: &Field) -> Option<Violation> {
    let rules = &field.rules;

    if rules.required {
        let missing = if field.kind.is_grouped() {
            !form.any_checked(&field.name)
        } else {
            field.is_blank()
        };
        if missing {
            return Some(Violation::Required);
        }
    }

    if let Some(pattern) = &rules.pattern
        && !pattern.is_match(&field.scalar())
    {
        return Some(Violation::Pattern);
    }

    if rules.has_range()
        && let Some(violation) = check_range(form, field)
    {
        return Some(violation);
    }

    if let Some(reference) = &rules.password {
        let matches = match form.by_id(reference) {
            Some(other) => other.scalar() == field.scalar(),
            None => {
                tracing::warn!(
                    field = %field.name,
                    reference = %reference,
                    "password reference points to no field"
                );
                false
            }
        };
        if !matches {
            return Some(Violation::PasswordMismatch);
        }
    }

    None
}

fn check_range(form: &Form, field: &Field) -> Option<Violation> {
    let (measured, violation) = match field.kind {
        FieldKind::Text | FieldKind::Password => {
            (field.value.chars().count() as f64, Violation::Length)
        }
        FieldKind::Number => {
            let raw = field.value.trim();
            // an empty number input measures as zero
            let number = if raw.is_empty() {
                0.0
            } else {
                match raw.parse::<f64>() {
                    Ok(n) if n.is_finite() => n,
                    _ => return Some(Violation::Value),
                }
            };
            (number, Violation::Value)
        }
        FieldKind::Checkbox => (form.checked_count(&field.name) as f64, Violation::Selection),
        FieldKind::Textarea
        | FieldKind::SelectOne
        | FieldKind::SelectMultiple
        | FieldKind::Radio
        | FieldKind::Hidden => return None,
    };

    if field.rules.in_range(measured) {
        None
    } else {
        Some(violation)
    }
}

/// Check one field and update its label message
///
/// Returns the violation when the field fails. Out-of-range indices pass.
pub fn check_field(form: &mut Form, index: usize, policy: ValidationPolicy) -> Option<Violation> {
    let field = form.field(index)?;
    let name = field.name.clone();
    let kind = field.kind;
    let keep_group_message = kind.is_grouped() && !policy.clear_grouped_first;
    let required = field.rules.required;
    let violation = evaluate(form, field);

    if !keep_group_message {
        form.clear_message(&name);
    }

    match violation {
        Some(violation) => {
            tracing::debug!(
                field = %name,
                kind = %kind,
                violation = %violation,
                "field failed validation"
            );
            form.set_message(&name, Some(Annotation::important(violation.message())));
        }
        // a kept group message is only lifted by a satisfied required rule
        None if keep_group_message && !required => {}
        None => form.clear_message(&name),
    }

    violation
}
