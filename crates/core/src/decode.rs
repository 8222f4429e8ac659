//! Two-phase response decoding.
//!
//! Bodies are first parsed into a [`serde_json::Value`] tree, then typed
//! extractors pull each field out and coerce Pinboard's encodings (string
//! booleans, space-delimited tags, numeric strings, two timestamp formats).
//! A shape mismatch is a [`DecodeError`], never a panic.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Timestamp format used by the notes endpoints.
pub const NOTE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub type Object = Map<String, Value>;

/// A type that can be built from a parsed JSON value.
pub trait Decode: Sized {
    fn decode(value: &Value) -> Result<Self, DecodeError>;
}

/// Parse raw bytes and decode them into `T`.
pub fn decode_body<T: Decode>(body: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(body)?;
    T::decode(&value)
}

pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn as_object(value: &Value) -> Result<&Object, DecodeError> {
    value.as_object().ok_or(DecodeError::Shape {
        expected: "object",
        found: kind_of(value),
    })
}

pub fn as_array(value: &Value) -> Result<&Vec<Value>, DecodeError> {
    value.as_array().ok_or(DecodeError::Shape {
        expected: "array",
        found: kind_of(value),
    })
}

fn field_type(field: &str, expected: &'static str, value: &Value) -> DecodeError {
    DecodeError::FieldType {
        field: field.to_string(),
        expected,
        found: kind_of(value),
    }
}

/// String field; absent or null yields an empty string.
pub fn string(obj: &Object, field: &str) -> Result<String, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(field_type(field, "string", other)),
    }
}

/// Pinboard boolean: the string `"yes"` is true, any other string is false.
pub fn yes_no(obj: &Object, field: &str) -> Result<bool, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::String(s)) => Ok(s == "yes"),
        Some(other) => Err(field_type(field, "\"yes\" or \"no\"", other)),
    }
}

/// Space-delimited tag string.
pub fn tags(obj: &Object, field: &str) -> Result<Vec<String>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(split_tags(s)),
        Some(other) => Err(field_type(field, "string", other)),
    }
}

/// Non-negative count given either as a JSON number or a numeric string.
pub fn count(field: &str, value: &Value) -> Result<u64, DecodeError> {
    let invalid = || DecodeError::Count {
        field: field.to_string(),
        value: value.to_string(),
    };
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse().map_err(|_| invalid()),
        other => Err(field_type(field, "count", other)),
    }
}

/// Optional count field; absent or null yields zero.
pub fn count_field(obj: &Object, field: &str) -> Result<u64, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => count(field, value),
    }
}

/// RFC 3339 timestamp; absent, null or empty yields `None`.
pub fn rfc3339(obj: &Object, field: &str) -> Result<Option<DateTime<Utc>>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|source| DecodeError::Timestamp {
                field: field.to_string(),
                value: s.clone(),
                source,
            }),
        Some(other) => Err(field_type(field, "timestamp string", other)),
    }
}

/// `YYYY-MM-DD HH:MM:SS` timestamp without zone; absent, null or empty yields `None`.
pub fn note_time(obj: &Object, field: &str) -> Result<Option<NaiveDateTime>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => NaiveDateTime::parse_from_str(s, NOTE_TIME_FORMAT)
            .map(Some)
            .map_err(|source| DecodeError::Timestamp {
                field: field.to_string(),
                value: s.clone(),
                source,
            }),
        Some(other) => Err(field_type(field, "timestamp string", other)),
    }
}

/// Array of strings; absent or null yields an empty list.
pub fn string_list(obj: &Object, field: &str) -> Result<Vec<String>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(field_type(field, "string", other)),
            })
            .collect(),
        Some(other) => Err(field_type(field, "array", other)),
    }
}

/// Split a space-delimited tag string. An empty string has no tags.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags the way Pinboard expects them on the wire.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Object {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_split_tags_empty_string_has_no_tags() {
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_split_tags_keeps_order() {
        assert_eq!(split_tags("tag1 tag2 tag3"), vec!["tag1", "tag2", "tag3"]);
    }

    #[test]
    fn test_split_tags_ignores_repeated_spaces() {
        assert_eq!(split_tags(" a  b "), vec!["a", "b"]);
    }

    #[test]
    fn test_join_tags_empty_list_is_empty_string() {
        assert_eq!(join_tags(&[]), "");
    }

    #[test]
    fn test_yes_no() {
        let o = obj(json!({"a": "yes", "b": "no", "c": "", "d": true}));
        assert!(yes_no(&o, "a").unwrap());
        assert!(!yes_no(&o, "b").unwrap());
        assert!(!yes_no(&o, "c").unwrap());
        assert!(!yes_no(&o, "missing").unwrap());
        assert!(matches!(
            yes_no(&o, "d"),
            Err(DecodeError::FieldType { found: "boolean", .. })
        ));
    }

    #[test]
    fn test_string_rejects_numbers() {
        let o = obj(json!({"href": 12}));
        let err = string(&o, "href").unwrap_err();
        assert_eq!(
            err.to_string(),
            "field `href`: expected string, found number"
        );
    }

    #[test]
    fn test_count_accepts_numbers_and_numeric_strings() {
        assert_eq!(count("x", &json!(4)).unwrap(), 4);
        assert_eq!(count("x", &json!("12")).unwrap(), 12);
        assert_eq!(count("x", &json!(40.0)).unwrap(), 40);
        assert!(matches!(
            count("x", &json!("many")),
            Err(DecodeError::Count { .. })
        ));
        assert!(matches!(
            count("x", &json!(-1)),
            Err(DecodeError::Count { .. })
        ));
        assert!(matches!(
            count("x", &json!([1])),
            Err(DecodeError::FieldType { .. })
        ));
    }

    #[test]
    fn test_rfc3339() {
        let o = obj(json!({"time": "2023-03-08T03:58:53Z", "bad": "yesterday", "empty": ""}));
        let time = rfc3339(&o, "time").unwrap().unwrap();
        assert_eq!(time.to_rfc3339(), "2023-03-08T03:58:53+00:00");
        assert!(rfc3339(&o, "empty").unwrap().is_none());
        assert!(rfc3339(&o, "missing").unwrap().is_none());
        assert!(matches!(
            rfc3339(&o, "bad"),
            Err(DecodeError::Timestamp { .. })
        ));
    }

    #[test]
    fn test_note_time_has_no_zone() {
        let o = obj(json!({
            "created_at": "2023-03-19 14:35:16",
            "updated_at": "2023-03-19T14:35:16Z"
        }));
        let created = note_time(&o, "created_at").unwrap().unwrap();
        assert_eq!(created.to_string(), "2023-03-19 14:35:16");
        assert!(note_time(&o, "updated_at").is_err());
    }

    #[test]
    fn test_decode_body_rejects_invalid_json() {
        #[derive(Debug)]
        struct Anything;
        impl Decode for Anything {
            fn decode(_: &Value) -> Result<Self, DecodeError> {
                Ok(Anything)
            }
        }

        assert!(matches!(
            decode_body::<Anything>(b"<html>"),
            Err(DecodeError::Json(_))
        ));
        assert!(decode_body::<Anything>(b"{}").is_ok());
    }
}
