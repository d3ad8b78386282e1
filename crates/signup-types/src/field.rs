//! Field identifiers and form variants

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed inputs a record holds.
///
/// The declaration order is the display order, and `Ord` follows it so that
/// sorted maps keyed by field iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Gender,
    Prefecture,
    Hobbies,
}

/// Shape of the value a field carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Tags,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Tags => write!(f, "tag list"),
        }
    }
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Gender,
        FieldId::Prefecture,
        FieldId::Hobbies,
    ];

    /// Name used in HTML `name` attributes, URLs and query strings
    pub fn wire_name(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Gender => "gender",
            FieldId::Prefecture => "prefecture",
            FieldId::Hobbies => "hobbies",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email address",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm password",
            FieldId::Gender => "Gender",
            FieldId::Prefecture => "Prefecture",
            FieldId::Hobbies => "Hobbies",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Hobbies => FieldKind::Tags,
            _ => FieldKind::Text,
        }
    }

    /// Secret fields are never echoed back into markup, logs or URLs.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::ConfirmPassword)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| FormError::UnknownFieldName(s.to_string()))
    }
}

/// Explicit version of the record's field set.
///
/// `Basic` carries the five account fields. `Extended` adds the profile
/// selections (gender, prefecture, hobbies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    #[default]
    Basic,
    Extended,
}

impl FormVariant {
    /// Active fields in display order
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FormVariant::Basic => &FieldId::ALL[..5],
            FormVariant::Extended => &FieldId::ALL,
        }
    }

    pub fn contains(self, field: FieldId) -> bool {
        self.fields().contains(&field)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormVariant::Basic => "basic",
            FormVariant::Extended => "extended",
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormVariant {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(FormVariant::Basic),
            "extended" => Ok(FormVariant::Extended),
            other => Err(FormError::UnknownVariant(other.to_string())),
        }
    }
}
