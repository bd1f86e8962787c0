//! Form configuration loading
//!
//! Rule sets can be authored next to the markup as `valid.*` attributes or
//! kept in a YAML/JSON file keyed by field name:
//!
//! ```yaml
//! policy:
//!   clear_grouped_first: false
//! fields:
//!   login:
//!     required: true
//!     regex: '^[a-z0-9_]+$'
//!     max: 32
//!   password_again:
//!     password: pwd1
//! ```

use crate::core::error::FormError;
use crate::core::form::Form;
use crate::core::rules::RuleSet;
use crate::core::validation::{ValidationPolicy, Validator};
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Validation configuration for one form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub policy: ValidationPolicy,

    /// Rule sets keyed by field name
    #[serde(default)]
    pub fields: IndexMap<String, RuleSet>,
}

impl FormConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.ensure_consistent()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.ensure_consistent()?;
        Ok(config)
    }

    fn ensure_consistent(&self) -> Result<(), FormError> {
        for (name, rules) in &self.fields {
            rules.ensure_consistent(name)?;
        }
        Ok(())
    }

    /// Merge several configurations
    ///
    /// Field rule sets are replaced as a whole, last one wins. The policy of
    /// the last configuration is kept.
    pub fn merge(configs: Vec<FormConfig>) -> Self {
        let mut merged = FormConfig::default();
        for config in configs {
            merged.policy = config.policy;
            for (name, rules) in config.fields {
                merged.fields.insert(name, rules);
            }
        }
        merged
    }

    /// Attach the configured rule sets to the form's fields
    ///
    /// Every field carrying a configured name gets that rule set, replacing
    /// any rules parsed from attributes. Configured names missing from the
    /// form are an error.
    pub fn apply(&self, form: &mut Form) -> Result<(), FormError> {
        for name in self.fields.keys() {
            if form.index_of(name).is_none() {
                return Err(FormError::UnknownField(name.clone()));
            }
        }

        for field in form.fields_mut() {
            if let Some(rules) = self.fields.get(&field.name) {
                field.rules = rules.clone();
            }
        }

        tracing::debug!(fields = self.fields.len(), "applied form configuration");
        Ok(())
    }

    /// A validator using the configured policy
    pub fn validator(&self) -> Validator {
        Validator::with_policy(self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::Field;

    const SIGNUP: &str = r#"
policy:
  clear_grouped_first: true
fields:
  login:
    required: true
    regex: '^[a-z]+$'
  age:
    min: 18
    max: 130
"#;

    #[test]
    fn test_from_yaml_str() {
        let config = FormConfig::from_yaml_str(SIGNUP).unwrap();

        assert!(config.policy.clear_grouped_first);
        assert_eq!(config.fields.len(), 2);
        assert!(config.fields["login"].required);
        assert_eq!(config.fields["age"].min, Some(18.0));

        let names: Vec<&str> = config.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["login", "age"]);
    }

    #[test]
    fn test_from_yaml_rejects_inverted_bounds() {
        let err = FormConfig::from_yaml_str("fields:\n  age:\n    min: 5\n    max: 1\n").unwrap_err();
        let form_err = err.downcast_ref::<FormError>().expect("rule error");
        assert_eq!(form_err.error_code(), "INVALID_RULE");
        assert!(form_err.to_string().contains("'age'"));
    }

    #[test]
    fn test_from_json_str() {
        let config =
            FormConfig::from_json_str(r#"{"fields": {"pwd2": {"password": "pwd1"}}}"#).unwrap();
        assert_eq!(config.fields["pwd2"].password.as_deref(), Some("pwd1"));
        assert!(!config.policy.clear_grouped_first);
    }

    #[test]
    fn test_yaml_serialization_roundtrip() {
        let config = FormConfig::from_yaml_str(SIGNUP).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = FormConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_apply_replaces_rules() {
        let config = FormConfig::from_yaml_str(SIGNUP).unwrap();
        let mut form = Form::new()
            .with_field(Field::text("login").with_rules(RuleSet::new().range(Some(50.0), None)))
            .with_field(Field::number("age"))
            .with_field(Field::text("nickname"));

        config.apply(&mut form).unwrap();

        assert!(form.field(0).unwrap().rules.required);
        assert_eq!(form.field(0).unwrap().rules.min, None);
        assert_eq!(form.field(1).unwrap().rules.max, Some(130.0));
        assert!(form.field(2).unwrap().rules.is_empty());
    }

    #[test]
    fn test_apply_unknown_field() {
        let config = FormConfig::from_yaml_str(SIGNUP).unwrap();
        let mut form = Form::new().with_field(Field::text("login"));

        let err = config.apply(&mut form).unwrap_err();
        assert_eq!(err.to_string(), "Field 'age' not found");
        assert!(form.field(0).unwrap().rules.is_empty());
    }

    #[test]
    fn test_merge_last_wins() {
        let first = FormConfig::from_yaml_str(SIGNUP).unwrap();
        let second =
            FormConfig::from_yaml_str("fields:\n  login:\n    max: 8\n  email:\n    required: true\n")
                .unwrap();

        let merged = FormConfig::merge(vec![first, second]);

        assert_eq!(merged.fields.len(), 3);
        assert!(!merged.fields["login"].required);
        assert_eq!(merged.fields["login"].max, Some(8.0));
        assert!(!merged.policy.clear_grouped_first);
    }

    #[test]
    fn test_merge_empty() {
        let merged = FormConfig::merge(vec![]);
        assert!(merged.fields.is_empty());
    }
}
