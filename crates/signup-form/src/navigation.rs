//! Page transition from the register form to the confirmation view.
//!
//! Only first name, last name and email travel in the query string; password
//! fields are never encoded.

use serde::{Deserialize, Serialize};
use signup_types::Record;
use std::collections::HashMap;

pub const REGISTER_PATH: &str = "/register";
pub const CONFIRM_PATH: &str = "/confirm";

/// The values the confirmation view redisplays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ConfirmationParams {
    pub fn from_record(record: &Record) -> Self {
        Self {
            first_name: record.first_name().to_string(),
            last_name: record.last_name().to_string(),
            email: record.email().to_string(),
        }
    }

    /// Reads the three parameters from a decoded query map.
    ///
    /// Returns `None` if any is missing or empty: the link is incomplete and the
    /// caller should send the user back to the form.
    pub fn from_query(query: &HashMap<String, String>) -> Option<Self> {
        let take = |key: &str| {
            query
                .get(key)
                .filter(|value| !value.is_empty())
                .cloned()
        };
        Some(Self {
            first_name: take("firstName")?,
            last_name: take("lastName")?,
            email: take("email")?,
        })
    }

    /// `firstName=..&lastName=..&email=..`, percent-encoded
    pub fn to_query(&self) -> String {
        format!(
            "firstName={}&lastName={}&email={}",
            urlencoding::encode(&self.first_name),
            urlencoding::encode(&self.last_name),
            urlencoding::encode(&self.email),
        )
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Where a successful submit navigates to
pub fn confirmation_location(record: &Record) -> String {
    format!(
        "{}?{}",
        CONFIRM_PATH,
        ConfirmationParams::from_record(record).to_query()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use signup_types::{FieldId, FieldValue, FormVariant};

    fn record() -> Record {
        Record::new(FormVariant::Basic)
            .with(FieldId::FirstName, FieldValue::text("太郎"))
            .and_then(|r| r.with(FieldId::LastName, FieldValue::text("Yamada Jr")))
            .and_then(|r| r.with(FieldId::Email, FieldValue::text("taro+1@example.jp")))
            .and_then(|r| r.with(FieldId::Password, FieldValue::text("Abcdef12")))
            .and_then(|r| r.with(FieldId::ConfirmPassword, FieldValue::text("Abcdef12")))
            .unwrap()
    }

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn location_encodes_three_fields_only() {
        let location = confirmation_location(&record());
        assert_eq!(
            location,
            "/confirm?firstName=%E5%A4%AA%E9%83%8E&lastName=Yamada%20Jr&email=taro%2B1%40example.jp"
        );
        assert!(!location.contains("password"));
        assert!(!location.contains("Abcdef12"));
    }

    #[test]
    fn from_query_requires_all_three() {
        assert_eq!(
            ConfirmationParams::from_query(&query(&[("email", "a@b.co")])),
            None
        );
        assert_eq!(
            ConfirmationParams::from_query(&query(&[
                ("firstName", ""),
                ("lastName", "Y"),
                ("email", "a@b.co")
            ])),
            None
        );

        let params = ConfirmationParams::from_query(&query(&[
            ("firstName", "Taro"),
            ("lastName", "Yamada"),
            ("email", "a@b.co"),
            ("password", "ignored"),
        ]))
        .unwrap();
        assert_eq!(params.full_name(), "Taro Yamada");
        assert_eq!(params.email, "a@b.co");
    }
}
