//! # formcheck
//!
//! Client-side form helpers for the gateway administration console, as a
//! typed library.
//!
//! ## Features
//!
//! - **Declarative Rules**: `valid.required`, `valid.regex`, `valid.min`,
//!   `valid.max` and `valid.password` parsed once into a [`RuleSet`](crate::core::RuleSet)
//! - **Ordered Checks**: required → pattern → range → password match, first
//!   failure wins
//! - **Inline Messages**: one label annotation per field, cleared on success
//! - **Page Alerts**: a single dismissable banner per form, replaced on show
//! - **Value Extraction**: `name → value` maps with checkbox/radio group
//!   semantics, or compact JSON
//! - **Element Reordering**: stable sort that moves nodes of any
//!   [`OrderedChildren`](crate::core::OrderedChildren) tree
//! - **Configuration-Based**: rule sets loadable from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck::prelude::*;
//!
//! let mut form = Form::new()
//!     .with_field(Field::password("pwd").with_id("pwd1").with_value("s3cret"))
//!     .with_field(
//!         Field::password("pwd_again")
//!             .with_value("typo")
//!             .with_attribute("valid.password", "pwd1")
//!             .unwrap(),
//!     );
//!
//! let invalid = Validator::new().validate(&mut form);
//! assert_eq!(invalid[0].message(), "passwords not match");
//! assert_eq!(form.focused(), Some(1));
//! ```

pub mod config;
pub mod core;
pub mod logging;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Form Model ===
    pub use crate::core::{
        field::{Field, FieldKind},
        form::Form,
        message::{Alert, Annotation, Annotations, FieldMessages, Severity},
        rules::{Pattern, RuleSet},
    };

    // === Validation ===
    pub use crate::core::validation::{
        InvalidField, ValidationPolicy, Validator, Violation, check_field, evaluate, validate,
    };

    // === Values ===
    pub use crate::core::values::{DataType, Extracted, FormValues, get_values, get_values_as};

    // === Reordering ===
    pub use crate::core::{
        sort::{sort_elements, sort_in_place},
        tree::{NodeId, NodeTree, OrderedChildren},
    };

    // === Errors ===
    pub use crate::core::error::{FormError, SortError};

    // === Config ===
    pub use crate::config::FormConfig;
}
