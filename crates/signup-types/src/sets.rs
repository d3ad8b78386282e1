//! Per-field error messages and touched flags

use crate::field::FieldId;
use std::collections::{BTreeMap, BTreeSet};

/// Field identifier to error message.
///
/// A field with no entry has no error currently known. Storing `None` or an
/// empty message clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: BTreeMap<FieldId, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FieldId, message: Option<String>) {
        match message {
            Some(msg) if !msg.is_empty() => {
                self.errors.insert(field, msg);
            }
            _ => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// True iff at least one field carries a non-empty message
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|msg| !msg.is_empty())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl FromIterator<(FieldId, String)> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = (FieldId, String)>>(iter: I) -> Self {
        let mut set = ErrorSet::new();
        for (field, msg) in iter {
            set.set(field, Some(msg));
        }
        set
    }
}

/// Fields the user has left, or that a submit attempt forced visible.
///
/// Flags are never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet {
    touched: BTreeSet<FieldId>,
}

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self, field: FieldId) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self, fields: &[FieldId]) {
        self.touched.extend(fields.iter().copied());
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    pub fn any(&self) -> bool {
        !self.touched.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_and_empty_messages_clear_the_field() {
        let mut errors = ErrorSet::new();
        errors.set(FieldId::Email, Some("bad".to_string()));
        assert!(errors.has_errors());

        errors.set(FieldId::Email, None);
        assert!(!errors.contains(FieldId::Email));

        errors.set(FieldId::Email, Some(String::new()));
        assert!(!errors.has_errors());
        assert!(errors.is_empty());
    }

    #[test]
    fn iterates_in_display_order() {
        let errors: ErrorSet = [
            (FieldId::Password, "p".to_string()),
            (FieldId::FirstName, "f".to_string()),
        ]
        .into_iter()
        .collect();
        let order: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(order, vec![FieldId::FirstName, FieldId::Password]);
    }

    #[test]
    fn touch_is_sticky() {
        let mut touched = TouchedSet::new();
        assert!(!touched.any());
        touched.touch(FieldId::Email);
        touched.touch(FieldId::Email);
        touched.touch_all(&[FieldId::Email, FieldId::Password]);
        assert!(touched.is_touched(FieldId::Email));
        assert!(touched.is_touched(FieldId::Password));
        assert!(!touched.is_touched(FieldId::FirstName));
    }
}
