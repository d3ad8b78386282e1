// File: src/form_body.rs
// Purpose: Decode application/x-www-form-urlencoded bodies, keeping repeated keys

use signup_types::{FieldId, FieldKind, FieldValue};

/// Decoded `key=value` pairs in body order. Repeated keys (checkbox groups)
/// appear once per value.
pub fn parse_pairs(body: &[u8]) -> Vec<(String, String)> {
    let form_str = String::from_utf8_lossy(body);
    form_str
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k), decode(v))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// The posted value for `field`.
///
/// A missing text field reads as empty; a tag field collects every value
/// posted under its name.
pub fn field_value(field: FieldId, pairs: &[(String, String)]) -> FieldValue {
    let name = field.wire_name();
    let mut values = pairs
        .iter()
        .filter(|(k, _)| k == name)
        .map(|(_, v)| v.clone());

    match field.kind() {
        FieldKind::Text => FieldValue::Text(values.next().unwrap_or_default()),
        FieldKind::Tags => FieldValue::Tags(values.collect()),
    }
}

/// Like [`field_value`], but `None` for a text field absent from the body.
/// A tag field is always present: an unchecked group posts nothing.
pub fn posted_value(field: FieldId, pairs: &[(String, String)]) -> Option<FieldValue> {
    let name = field.wire_name();
    match field.kind() {
        FieldKind::Text if !pairs.iter().any(|(k, _)| k == name) => None,
        _ => Some(field_value(field, pairs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_pairs() {
        let pairs = parse_pairs(b"firstName=Taro+Jr&email=taro%40example.jp&flag");
        assert_eq!(
            pairs,
            vec![
                ("firstName".to_string(), "Taro Jr".to_string()),
                ("email".to_string(), "taro@example.jp".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn literal_plus_survives_when_encoded() {
        let pairs = parse_pairs(b"email=a%2Bb%40c.jp");
        assert_eq!(pairs[0].1, "a+b@c.jp");
    }

    #[test]
    fn empty_body() {
        assert!(parse_pairs(b"").is_empty());
    }

    #[test]
    fn collects_repeated_tags() {
        let pairs = parse_pairs(b"hobbies=music&firstName=T&hobbies=art");
        assert_eq!(
            field_value(FieldId::Hobbies, &pairs),
            FieldValue::tags(["music", "art"])
        );
        assert_eq!(field_value(FieldId::FirstName, &pairs), FieldValue::text("T"));
        assert_eq!(field_value(FieldId::Email, &pairs), FieldValue::text(""));
    }

    #[test]
    fn missing_tags_are_empty() {
        assert_eq!(field_value(FieldId::Hobbies, &[]), FieldValue::Tags(vec![]));
    }

    #[test]
    fn posted_value_skips_absent_text() {
        let pairs = parse_pairs(b"firstName=&lastName=Y");
        assert_eq!(posted_value(FieldId::FirstName, &pairs), Some(FieldValue::text("")));
        assert_eq!(posted_value(FieldId::LastName, &pairs), Some(FieldValue::text("Y")));
        assert_eq!(posted_value(FieldId::Email, &pairs), None);
        assert_eq!(posted_value(FieldId::Hobbies, &pairs), Some(FieldValue::Tags(vec![])));
    }
}
