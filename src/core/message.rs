//! Inline field messages shown next to a field's label, and the page alert

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual style of a message label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Important,
    Warning,
    Success,
    Info,
    Inverse,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Important => "important",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Inverse => "inverse",
        }
    }

    /// CSS classes of the rendered label
    pub fn css_class(&self) -> String {
        format!("label label-{}", self.as_str())
    }

    /// Alert banner flavour; banners have no inverse style
    pub fn alert_type(&self) -> &'static str {
        match self {
            Severity::Important => "error",
            Severity::Warning => "block",
            Severity::Success => "success",
            Severity::Info | Severity::Inverse => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message attached to a field's label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub severity: Severity,
    pub text: String,
}

impl Annotation {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn important(text: impl Into<String>) -> Self {
        Self::new(Severity::Important, text)
    }

    /// Markup appended to the label
    pub fn to_html(&self) -> String {
        format!(
            r#"<span class="{}" style="margin-left: 5px">{}</span>"#,
            self.severity.css_class(),
            tera::escape_html(&self.text)
        )
    }
}

/// A page-level banner with a heading, shown above the form
///
/// A page holds at most one alert; see [`Form::show_alert`](crate::core::form::Form::show_alert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Important, title, message)
    }

    /// Dismissable banner markup
    pub fn to_html(&self) -> String {
        format!(
            r##"<div class="alert alert-{} fade in"><a class="close" href="#">×</a><p><h4 class="alert-heading">{}</h4>{}</p></div>"##,
            self.severity.alert_type(),
            tera::escape_html(&self.title),
            tera::escape_html(&self.message)
        )
    }
}

/// Where field messages are rendered
///
/// Labels are addressed by field name (`label[for=name]`), so every member of
/// a checkbox or radio group shares one message slot.
pub trait FieldMessages {
    /// Remove the field's current message, then show `message` if given
    ///
    /// Passing `None` always leaves the field without a message.
    fn set_message(&mut self, field: &str, message: Option<Annotation>);

    /// The message currently shown for the field
    fn message(&self, field: &str) -> Option<&Annotation>;

    fn clear_message(&mut self, field: &str) {
        self.set_message(field, None);
    }
}

/// In-memory message slots, in the order messages were first shown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations {
    slots: IndexMap<String, Annotation>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Annotation)> {
        self.slots.iter().map(|(name, note)| (name.as_str(), note))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl FieldMessages for Annotations {
    fn set_message(&mut self, field: &str, message: Option<Annotation>) {
        self.slots.shift_remove(field);
        if let Some(message) = message {
            self.slots.insert(field.to_string(), message);
        }
    }

    fn message(&self, field: &str) -> Option<&Annotation> {
        self.slots.get(field)
    }
}
