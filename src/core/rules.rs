//! Declarative validation rules attached to a field
//!
//! A [`RuleSet`] is the typed form of the `valid.*` attributes authored in
//! markup. It is built once (from attributes or from a
//! [`FormConfig`](crate::config::FormConfig)) and then handed to the
//! validator, which never looks at raw attributes.

use super::error::FormError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Attribute declaring the field as required
pub const ATTR_REQUIRED: &str = "valid.required";
/// Attribute holding a regular expression the value must match
pub const ATTR_REGEX: &str = "valid.regex";
/// Attribute holding the inclusive lower bound
pub const ATTR_MIN: &str = "valid.min";
/// Attribute holding the inclusive upper bound
pub const ATTR_MAX: &str = "valid.max";
/// Attribute holding the id of the field whose value must be repeated
pub const ATTR_PASSWORD: &str = "valid.password";

/// A compiled regex rule, serialized as its source string
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile a pattern
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    /// Unanchored search, like `String.prototype.match`
    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// The rules declared for one field
///
/// Every rule is optional and independent of the others. An empty rule set
/// always passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none", alias = "regex")]
    pub pattern: Option<Pattern>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Id of the field this one must equal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from markup attributes
    ///
    /// Keys outside the `valid.*` family are ignored, so the whole attribute
    /// list of an element can be passed in. Empty values count as
    /// "not declared".
    pub fn from_attributes<I, K, V>(field: &str, attributes: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut rules = Self::default();
        for (key, value) in attributes {
            rules.apply_attribute(field, key.as_ref(), value.as_ref())?;
        }
        rules.ensure_consistent(field)?;
        Ok(rules)
    }

    /// Apply a single `valid.*` attribute
    pub fn apply_attribute(&mut self, field: &str, key: &str, value: &str) -> Result<(), FormError> {
        let value = value.trim();
        match key {
            ATTR_REQUIRED => {
                self.required = !value.is_empty() && !value.eq_ignore_ascii_case("false");
            }
            ATTR_REGEX if !value.is_empty() => {
                let pattern =
                    Pattern::new(value).map_err(|e| FormError::invalid_rule(field, key, e))?;
                self.pattern = Some(pattern);
            }
            ATTR_MIN if !value.is_empty() => {
                self.min = Some(parse_bound(field, key, value)?);
            }
            ATTR_MAX if !value.is_empty() => {
                self.max = Some(parse_bound(field, key, value)?);
            }
            ATTR_PASSWORD if !value.is_empty() => {
                self.password = Some(value.to_string());
            }
            _ => {}
        }
        Ok(())
    }

    /// Reject bounds that no value could satisfy
    pub fn ensure_consistent(&self, field: &str) -> Result<(), FormError> {
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(FormError::invalid_rule(
                field,
                ATTR_MIN,
                format!("min {} is greater than max {}", min, max),
            ));
        }
        Ok(())
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Add a regex rule; a bad regex is reported with its source
    pub fn pattern(mut self, source: &str) -> Result<Self, FormError> {
        let pattern = Pattern::new(source).map_err(|e| FormError::InvalidPattern {
            pattern: source.to_string(),
            message: e.to_string(),
        })?;
        self.pattern = Some(pattern);
        Ok(self)
    }

    pub fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn matches_password(mut self, id: impl Into<String>) -> Self {
        self.password = Some(id.into());
        self
    }

    /// Check if no rule is declared
    pub fn is_empty(&self) -> bool {
        !self.required
            && self.pattern.is_none()
            && !self.has_range()
            && self.password.is_none()
    }

    pub fn has_range(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Inclusive range test, a missing bound is unbounded
    pub fn in_range(&self, measured: f64) -> bool {
        self.min.is_none_or(|min| measured >= min) && self.max.is_none_or(|max| measured <= max)
    }
}

fn parse_bound(field: &str, key: &str, value: &str) -> Result<f64, FormError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FormError::invalid_rule(field, key, format!("'{}' is not a number", value)))
}
