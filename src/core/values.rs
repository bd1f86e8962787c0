//! Field value extraction
//!
//! Turns a form into a `name → value` map, the shape the console posts to
//! its JSON endpoints.

use super::error::FormError;
use super::field::FieldKind;
use super::form::Form;
use indexmap::IndexMap;
use serde_json::Value;
use std::str::FromStr;

/// Extracted values keyed by field name, in first-seen order
pub type FormValues = IndexMap<String, Value>;

/// Output format of [`get_values_as`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataType {
    #[default]
    Map,
    Json,
}

impl DataType {
    /// Parse the optional `dataType` argument: exactly `"json"` selects
    /// JSON, anything else (`"JSON"` included) the plain map
    pub fn from_option(data_type: Option<&str>) -> Self {
        match data_type {
            Some("json") => DataType::Json,
            _ => DataType::Map,
        }
    }
}

impl FromStr for DataType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_option(Some(s)))
    }
}

/// Result of [`get_values_as`]
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    Map(FormValues),
    Json(String),
}

impl Extracted {
    pub fn into_map(self) -> Option<FormValues> {
        match self {
            Extracted::Map(values) => Some(values),
            Extracted::Json(_) => None,
        }
    }

    pub fn into_json(self) -> Option<String> {
        match self {
            Extracted::Json(json) => Some(json),
            Extracted::Map(_) => None,
        }
    }
}

/// Collect the form's values
///
/// - scalar kinds map to their string value
/// - `select-multiple` maps to the array of selected values, or null
/// - a checkbox group maps to the array of its checked values
/// - a radio group maps to its checked value; the key is left out when
///   nothing is checked or the checked value is empty
pub fn get_values(form: &Form) -> FormValues {
    let mut values = FormValues::new();

    for field in form.fields() {
        let name = &field.name;
        match field.kind {
            FieldKind::Text
            | FieldKind::Textarea
            | FieldKind::Number
            | FieldKind::Password
            | FieldKind::SelectOne
            | FieldKind::Hidden => {
                values.insert(name.clone(), Value::String(field.value.clone()));
            }
            FieldKind::SelectMultiple => {
                let selected = if field.selected.is_empty() {
                    Value::Null
                } else {
                    Value::from(field.selected.clone())
                };
                values.insert(name.clone(), selected);
            }
            FieldKind::Checkbox => {
                if values.contains_key(name) {
                    continue;
                }
                let checked: Vec<Value> = form
                    .group(name)
                    .filter(|f| f.kind == FieldKind::Checkbox && f.checked)
                    .map(|f| Value::String(f.value.clone()))
                    .collect();
                values.insert(name.clone(), Value::Array(checked));
            }
            FieldKind::Radio => {
                if values.contains_key(name) {
                    continue;
                }
                if let Some(checked) = form
                    .group(name)
                    .find(|f| f.kind == FieldKind::Radio && f.checked)
                    .filter(|f| !f.value.is_empty())
                {
                    values.insert(name.clone(), Value::String(checked.value.clone()));
                }
            }
        }
    }

    tracing::trace!(fields = values.len(), "extracted form values");
    values
}

/// Collect the form's values in the requested format
pub fn get_values_as(form: &Form, data_type: DataType) -> Result<Extracted, FormError> {
    let values = get_values(form);
    match data_type {
        DataType::Map => Ok(Extracted::Map(values)),
        DataType::Json => Ok(Extracted::Json(serde_json::to_string(&values)?)),
    }
}
