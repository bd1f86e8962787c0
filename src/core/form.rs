//! The form container: fields in document order plus their label messages

use super::error::FormError;
use super::field::{Field, FieldKind};
use super::message::{Alert, Annotation, Annotations, FieldMessages};
use serde::{Deserialize, Serialize};

/// A form, or any container of input fields
///
/// Field order is document order; it drives the order of validation
/// failures and of extracted values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    annotations: Annotations,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    focused: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    alert: Option<Alert>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a field, returning its index
    pub fn push(&mut self, field: Field) -> usize {
        self.fields.push(field);
        self.fields.len() - 1
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the first field with this name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Field looked up by its element id
    pub fn by_id(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id.as_deref() == Some(id))
    }

    /// Every field sharing the given name
    pub fn group<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields.iter().filter(move |f| f.name == name)
    }

    /// Number of checked checkboxes or radios named `name`
    pub fn checked_count(&self, name: &str) -> usize {
        self.group(name)
            .filter(|f| f.kind.is_grouped() && f.checked)
            .count()
    }

    pub fn any_checked(&self, name: &str) -> bool {
        self.checked_count(name) > 0
    }

    /// Set the value of every scalar field named `name`
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let mut found = false;
        for field in self.fields.iter_mut().filter(|f| f.name == name) {
            field.value = value.to_string();
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(FormError::UnknownField(name.to_string()))
        }
    }

    /// Check or uncheck the group member of `name` whose value is `value`
    ///
    /// Checking a radio unchecks the rest of its group.
    pub fn set_checked(&mut self, name: &str, value: &str, checked: bool) -> Result<(), FormError> {
        let target = self
            .fields
            .iter()
            .position(|f| f.name == name && f.kind.is_grouped() && f.value == value)
            .ok_or_else(|| FormError::UnknownField(format!("{}={}", name, value)))?;

        if checked && self.fields[target].kind == FieldKind::Radio {
            for field in self.fields.iter_mut().filter(|f| f.name == name) {
                field.checked = false;
            }
        }
        self.fields[target].checked = checked;
        Ok(())
    }

    /// Move input focus to a field
    pub fn focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focused = Some(index);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.focused.and_then(|i| self.fields.get(i))
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    /// Show a page alert, replacing the one currently shown
    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    /// Remove the page alert, if any
    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }
}

impl FieldMessages for Form {
    fn set_message(&mut self, field: &str, message: Option<Annotation>) {
        self.annotations.set_message(field, message);
    }

    fn message(&self, field: &str) -> Option<&Annotation> {
        self.annotations.message(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Severity;

    fn options_form() -> Form {
        Form::new()
            .with_field(Field::text("name"))
            .with_field(Field::checkbox("opts", "a"))
            .with_field(Field::checkbox("opts", "b"))
            .with_field(Field::radio("mode", "x"))
            .with_field(Field::radio("mode", "y"))
    }

    #[test]
    fn test_group_lookup() {
        let form = options_form();
        assert_eq!(form.group("opts").count(), 2);
        assert_eq!(form.index_of("mode"), Some(3));
        assert_eq!(form.index_of("missing"), None);
    }

    #[test]
    fn test_checked_count() {
        let mut form = options_form();
        assert!(!form.any_checked("opts"));

        form.set_checked("opts", "a", true).unwrap();
        form.set_checked("opts", "b", true).unwrap();
        assert_eq!(form.checked_count("opts"), 2);
    }

    #[test]
    fn test_radio_check_is_exclusive() {
        let mut form = options_form();
        form.set_checked("mode", "x", true).unwrap();
        form.set_checked("mode", "y", true).unwrap();

        let checked: Vec<&str> = form
            .group("mode")
            .filter(|f| f.checked)
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(checked, vec!["y"]);
    }

    #[test]
    fn test_set_value_unknown_field() {
        let mut form = options_form();
        let err = form.set_value("nope", "x").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
        assert!(form.set_value("name", "Jo").is_ok());
        assert_eq!(form.field(0).unwrap().value, "Jo");
    }

    #[test]
    fn test_by_id() {
        let form = Form::new()
            .with_field(Field::password("pwd").with_id("pwd1"))
            .with_field(Field::password("pwd_again").with_id("pwd2"));
        assert_eq!(form.by_id("pwd2").map(|f| f.name.as_str()), Some("pwd_again"));
        assert!(form.by_id("pwd3").is_none());
    }

    #[test]
    fn test_focus_ignores_out_of_range() {
        let mut form = options_form();
        form.focus(10);
        assert_eq!(form.focused(), None);
        form.focus(2);
        assert_eq!(form.focused_field().map(|f| f.kind), Some(FieldKind::Checkbox));
        form.blur();
        assert!(form.focused().is_none());
    }

    #[test]
    fn test_alert_slot_replaces_previous() {
        let mut form = options_form();
        assert!(form.alert().is_none());

        form.show_alert(Alert::error("Error", "save failed"));
        form.show_alert(Alert::new(Severity::Success, "Done", "saved"));
        assert_eq!(form.alert().map(|a| a.title.as_str()), Some("Done"));

        let dismissed = form.dismiss_alert().unwrap();
        assert_eq!(dismissed.message, "saved");
        assert!(form.alert().is_none());
        assert!(form.dismiss_alert().is_none());
    }

    #[test]
    fn test_alert_is_independent_of_field_messages() {
        let mut form = options_form();
        form.set_message("name", Some(Annotation::important("required")));
        form.show_alert(Alert::error("Error", "check the form"));
        form.clear_message("name");

        assert!(form.annotations().is_empty());
        assert!(form.alert().is_some());
    }

    #[test]
    fn test_deserialize_from_json() {
        let form: Form = serde_json::from_str(
            r#"{"fields": [
                {"name": "login", "kind": "text", "value": "bob", "rules": {"required": true}},
                {"name": "zones", "kind": "select-multiple", "selected": ["eu"]}
            ]}"#,
        )
        .expect("form should parse");

        assert_eq!(form.len(), 2);
        assert!(form.field(0).unwrap().rules.required);
        assert_eq!(form.field(1).unwrap().selected, vec!["eu".to_string()]);
    }
}
