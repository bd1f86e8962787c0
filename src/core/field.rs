//! Field kinds and the form field model

use super::error::FormError;
use super::rules::RuleSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The recognized input kinds, keyed by the DOM `type` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Password,
    Number,
    Textarea,
    SelectOne,
    SelectMultiple,
    Checkbox,
    Radio,
    Hidden,
}

impl FieldKind {
    pub const ALL: [FieldKind; 9] = [
        FieldKind::Text,
        FieldKind::Password,
        FieldKind::Number,
        FieldKind::Textarea,
        FieldKind::SelectOne,
        FieldKind::SelectMultiple,
        FieldKind::Checkbox,
        FieldKind::Radio,
        FieldKind::Hidden,
    ];

    /// The DOM `type` string
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Textarea => "textarea",
            FieldKind::SelectOne => "select-one",
            FieldKind::SelectMultiple => "select-multiple",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Hidden => "hidden",
        }
    }

    /// Checkboxes and radios act as one unit per name
    pub fn is_grouped(&self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }

    /// Hidden inputs carry values but are never validated
    pub fn is_validated(&self) -> bool {
        !matches!(self, FieldKind::Hidden)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormError::UnknownFieldType(s.to_string()))
    }
}

/// One input control of a form
///
/// `value` is the control's own value: the typed text for scalar inputs, the
/// submitted value for a checkbox or radio. `checked` only matters for
/// grouped kinds and `selected` only for `select-multiple`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected: Vec<String>,
    #[serde(default)]
    pub rules: RuleSet,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind,
            value: String::new(),
            checked: false,
            selected: Vec::new(),
            rules: RuleSet::default(),
        }
    }

    /// Build a field from its DOM `type` string
    pub fn from_type(name: impl Into<String>, kind: &str) -> Result<Self, FormError> {
        Ok(Self::new(name, kind.parse()?))
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn password(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Password)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox).with_value(value)
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Radio).with_value(value)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_selected<I, S>(mut self, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = selected.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Parse a markup attribute into the field's rule set
    pub fn with_attribute(mut self, key: &str, value: &str) -> Result<Self, FormError> {
        self.rules.apply_attribute(&self.name, key, value)?;
        self.rules.ensure_consistent(&self.name)?;
        Ok(self)
    }

    /// The value as the rule checks see it
    ///
    /// A `select-multiple` is flattened to its selected values joined by `,`.
    pub fn scalar(&self) -> String {
        match self.kind {
            FieldKind::SelectMultiple => self.selected.join(","),
            _ => self.value.clone(),
        }
    }

    /// Check if the control holds no value
    pub fn is_blank(&self) -> bool {
        match self.kind {
            FieldKind::SelectMultiple => self.selected.is_empty(),
            _ => self.value.is_empty(),
        }
    }
}
