// File: src/error.rs
// Purpose: Contract errors raised when a caller addresses a field the record does not have

use crate::field::{FieldId, FieldKind, FormVariant};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field name '{0}'")]
    UnknownFieldName(String),

    #[error("field '{field}' is not part of the {variant} form")]
    FieldNotInVariant { field: FieldId, variant: FormVariant },

    #[error("field '{field}' expects a {expected} value")]
    KindMismatch { field: FieldId, expected: FieldKind },

    #[error("unknown form variant '{0}'")]
    UnknownVariant(String),
}
