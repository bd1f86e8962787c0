//! Core module containing the form model, validation engine and helpers

pub mod error;
pub mod field;
pub mod form;
pub mod message;
pub mod rules;
pub mod sort;
pub mod tree;
pub mod validation;
pub mod values;

pub use error::{FormError, SortError};
pub use field::{Field, FieldKind};
pub use form::Form;
pub use message::{Alert, Annotation, Annotations, FieldMessages, Severity};
pub use rules::{Pattern, RuleSet};
pub use sort::{sort_elements, sort_in_place};
pub use tree::{NodeId, NodeTree, OrderedChildren};
pub use validation::{InvalidField, ValidationPolicy, Validator, Violation};
pub use values::{DataType, Extracted, FormValues, get_values, get_values_as};
