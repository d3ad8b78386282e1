//! Signup Validation
//!
//! Pure validation for the signup record. The predicates in [`email`],
//! [`password`], [`string`] and [`collection`] are reusable on their own;
//! [`rules`] combines them into the per-field rule table.

pub mod collection;
pub mod email;
pub mod messages;
pub mod password;
pub mod rules;
pub mod string;

pub use collection::*;
pub use email::*;
pub use password::*;
pub use rules::{has_errors, validate_field, validate_form};
pub use string::*;
