//! Signup form types
//!
//! The fixed vocabulary shared by validation, the form state container and the
//! pages: field identifiers, the versioned [`Record`], the enumerated options
//! offered by the extended form, and the per-field [`ErrorSet`] / [`TouchedSet`].

pub mod error;
pub mod field;
pub mod options;
pub mod record;
pub mod sets;

pub use error::FormError;
pub use field::{FieldId, FieldKind, FormVariant};
pub use options::{Gender, Prefecture, HOBBY_TAGS, PREFECTURES};
pub use record::{FieldValue, Record};
pub use sets::{ErrorSet, TouchedSet};
