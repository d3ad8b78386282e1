// File: src/rules.rs
// Purpose: Per-field rule table and whole-record validation

use crate::collection::{first_unknown, validate_min_items};
use crate::email::matches_email_shape;
use crate::messages as msg;
use crate::password::{check_password_strength, PasswordIssue};
use crate::string::{is_blank, is_one_of, validate_min_trimmed_length};
use signup_types::{ErrorSet, FieldId, FieldValue, Gender, Record, HOBBY_TAGS, PREFECTURES};

/// Validates one field value. First failing rule wins.
///
/// `record` supplies the other fields for cross-field rules; without it the
/// confirm-password match is skipped. A value of the wrong kind for `field`
/// yields no message.
pub fn validate_field(field: FieldId, value: &FieldValue, record: Option<&Record>) -> Option<String> {
    let message = match (field, value) {
        (FieldId::FirstName, FieldValue::Text(v)) => {
            required_name(v, msg::FIRST_NAME_REQUIRED, msg::FIRST_NAME_TOO_SHORT)
        }
        (FieldId::LastName, FieldValue::Text(v)) => {
            required_name(v, msg::LAST_NAME_REQUIRED, msg::LAST_NAME_TOO_SHORT)
        }
        (FieldId::Email, FieldValue::Text(v)) => email(v),
        (FieldId::Password, FieldValue::Text(v)) => password(v),
        (FieldId::ConfirmPassword, FieldValue::Text(v)) => confirm_password(v, record),
        (FieldId::Gender, FieldValue::Text(v)) => choice(
            v,
            Gender::ALL.iter().map(|g| g.value()),
            msg::GENDER_REQUIRED,
            msg::GENDER_UNKNOWN,
        ),
        (FieldId::Prefecture, FieldValue::Text(v)) => choice(
            v,
            PREFECTURES.iter().map(|p| p.slug),
            msg::PREFECTURE_REQUIRED,
            msg::PREFECTURE_UNKNOWN,
        ),
        (FieldId::Hobbies, FieldValue::Tags(tags)) => hobbies(tags),
        _ => None,
    };
    message.map(str::to_string)
}

/// Runs [`validate_field`] over every field of the record's variant and keeps
/// the failures.
pub fn validate_form(record: &Record) -> ErrorSet {
    record
        .variant()
        .fields()
        .iter()
        .filter_map(|&field| {
            let value = record.get(field)?;
            validate_field(field, &value, Some(record)).map(|message| (field, message))
        })
        .collect()
}

/// True iff at least one field carries a non-empty message
pub fn has_errors(errors: &ErrorSet) -> bool {
    errors.has_errors()
}

fn required_name(value: &str, required: &'static str, too_short: &'static str) -> Option<&'static str> {
    if is_blank(value) {
        return Some(required);
    }
    validate_min_trimmed_length(value, 1).err().map(|_| too_short)
}

fn email(value: &str) -> Option<&'static str> {
    if is_blank(value) {
        Some(msg::EMAIL_REQUIRED)
    } else if !matches_email_shape(value) {
        Some(msg::EMAIL_INVALID)
    } else {
        None
    }
}

fn password(value: &str) -> Option<&'static str> {
    match check_password_strength(value) {
        Ok(()) => None,
        Err(PasswordIssue::Empty) => Some(msg::PASSWORD_REQUIRED),
        Err(PasswordIssue::TooShort) => Some(msg::PASSWORD_TOO_SHORT),
        Err(PasswordIssue::MissingCharacterClass) => Some(msg::PASSWORD_WEAK),
    }
}

fn confirm_password(value: &str, record: Option<&Record>) -> Option<&'static str> {
    if value.is_empty() {
        return Some(msg::CONFIRM_PASSWORD_REQUIRED);
    }
    match record {
        Some(r) if r.password() != value => Some(msg::PASSWORDS_DO_NOT_MATCH),
        _ => None,
    }
}

fn choice<'a, I>(
    value: &str,
    allowed: I,
    required: &'static str,
    unknown: &'static str,
) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    if value.is_empty() {
        Some(required)
    } else if !is_one_of(value, allowed) {
        Some(unknown)
    } else {
        None
    }
}

fn hobbies(tags: &[String]) -> Option<&'static str> {
    if validate_min_items(tags, 1).is_err() {
        Some(msg::HOBBIES_REQUIRED)
    } else if first_unknown(tags, &HOBBY_TAGS).is_some() {
        Some(msg::HOBBIES_UNKNOWN)
    } else {
        None
    }
}
