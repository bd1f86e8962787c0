//! Declarative form validation
//!
//! Each field carries a [`RuleSet`](crate::core::rules::RuleSet). The
//! [`check`] module evaluates one field and updates its label message, the
//! [`validator`] module runs every field of a form and reports the failures
//! in document order.

pub mod check;
pub mod validator;

pub use check::{ValidationPolicy, Violation, check_field, evaluate};
pub use validator::{InvalidField, Validator, validate};
