// File: src/record.rs
// Purpose: The record - one value per field of the form variant

use crate::error::FormError;
use crate::field::{FieldId, FieldKind, FormVariant};
use std::fmt;

/// A candidate value for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Tags(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn tags<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Tags(values.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Tags(_) => FieldKind::Tags,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Tags(_) => None,
        }
    }

    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            FieldValue::Tags(tags) => Some(tags),
            FieldValue::Text(_) => None,
        }
    }

    /// The value a freshly mounted form holds for a field of this kind
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Tags => FieldValue::Tags(Vec::new()),
        }
    }
}

/// Current values of every field of a form instance.
///
/// Fields outside the record's variant stay empty and cannot be set, so the
/// addressable key set is exactly `variant.fields()`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Record {
    variant: FormVariant,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    gender: String,
    prefecture: String,
    hobbies: Vec<String>,
}

impl Record {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn prefecture(&self) -> &str {
        &self.prefecture
    }

    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }

    /// Current value of `field`, or `None` when the variant lacks it
    pub fn get(&self, field: FieldId) -> Option<FieldValue> {
        if !self.variant.contains(field) {
            return None;
        }
        let value = match field {
            FieldId::Hobbies => FieldValue::Tags(self.hobbies.clone()),
            text => FieldValue::Text(self.text_slot(text)?.clone()),
        };
        Some(value)
    }

    /// Replace the value of `field`. Leaves the record untouched on error.
    pub fn set(&mut self, field: FieldId, value: FieldValue) -> Result<(), FormError> {
        if !self.variant.contains(field) {
            return Err(FormError::FieldNotInVariant {
                field,
                variant: self.variant,
            });
        }

        match (field, value) {
            (FieldId::Hobbies, FieldValue::Tags(tags)) => self.hobbies = tags,
            (FieldId::Hobbies, FieldValue::Text(_)) | (_, FieldValue::Tags(_)) => {
                return Err(FormError::KindMismatch {
                    field,
                    expected: field.kind(),
                });
            }
            (text, FieldValue::Text(s)) => {
                if let Some(slot) = self.text_slot_mut(text) {
                    *slot = s;
                }
            }
        }
        Ok(())
    }

    /// Builder form of [`Record::set`]
    pub fn with(mut self, field: FieldId, value: FieldValue) -> Result<Self, FormError> {
        self.set(field, value)?;
        Ok(self)
    }

    fn text_slot(&self, field: FieldId) -> Option<&String> {
        match field {
            FieldId::FirstName => Some(&self.first_name),
            FieldId::LastName => Some(&self.last_name),
            FieldId::Email => Some(&self.email),
            FieldId::Password => Some(&self.password),
            FieldId::ConfirmPassword => Some(&self.confirm_password),
            FieldId::Gender => Some(&self.gender),
            FieldId::Prefecture => Some(&self.prefecture),
            FieldId::Hobbies => None,
        }
    }

    fn text_slot_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::FirstName => Some(&mut self.first_name),
            FieldId::LastName => Some(&mut self.last_name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Password => Some(&mut self.password),
            FieldId::ConfirmPassword => Some(&mut self.confirm_password),
            FieldId::Gender => Some(&mut self.gender),
            FieldId::Prefecture => Some(&mut self.prefecture),
            FieldId::Hobbies => None,
        }
    }
}

// Passwords must not leak through `{:?}` into logs.
impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Record");
        s.field("variant", &self.variant)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>");
        if self.variant == FormVariant::Extended {
            s.field("gender", &self.gender)
                .field("prefecture", &self.prefecture)
                .field("hobbies", &self.hobbies);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_record_is_empty() {
        let record = Record::new(FormVariant::Extended);
        for &field in FormVariant::Extended.fields() {
            assert_eq!(record.get(field), Some(FieldValue::empty(field.kind())));
        }
    }

    #[test]
    fn set_and_get_text() {
        let mut record = Record::new(FormVariant::Basic);
        record.set(FieldId::Email, FieldValue::text("a@b.co")).unwrap();
        assert_eq!(record.email(), "a@b.co");
        assert_eq!(record.get(FieldId::Email), Some(FieldValue::text("a@b.co")));
    }

    #[test]
    fn rejects_field_outside_variant() {
        let mut record = Record::new(FormVariant::Basic);
        let err = record
            .set(FieldId::Gender, FieldValue::text("male"))
            .unwrap_err();
        assert_eq!(
            err,
            FormError::FieldNotInVariant {
                field: FieldId::Gender,
                variant: FormVariant::Basic
            }
        );
        assert_eq!(record.get(FieldId::Gender), None);
        assert_eq!(record, Record::new(FormVariant::Basic));
    }

    #[test]
    fn rejects_kind_mismatch() {
        let mut record = Record::new(FormVariant::Extended);
        assert!(matches!(
            record.set(FieldId::Hobbies, FieldValue::text("music")),
            Err(FormError::KindMismatch { .. })
        ));
        assert!(matches!(
            record.set(FieldId::Email, FieldValue::tags(["a"])),
            Err(FormError::KindMismatch { .. })
        ));
        record
            .set(FieldId::Hobbies, FieldValue::tags(["music", "art"]))
            .unwrap();
        assert_eq!(record.hobbies(), &["music".to_string(), "art".to_string()]);
    }

    #[test]
    fn debug_redacts_passwords() {
        let record = Record::new(FormVariant::Basic)
            .with(FieldId::Password, FieldValue::text("Secret123"))
            .unwrap();
        let debug = format!("{:?}", record);
        assert!(!debug.contains("Secret123"));
        assert!(debug.contains("<redacted>"));
    }
}
