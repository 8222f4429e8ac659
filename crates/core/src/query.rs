//! Query-string construction and shared input validators.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::decode::join_tags;
use crate::error::Error;

/// Maximum number of tags on a new bookmark.
pub const MAX_BOOKMARK_TAGS: usize = 100;

/// Maximum number of tags in a filter.
pub const MAX_FILTER_TAGS: usize = 3;

/// How far ahead of "now" an input timestamp may be, in minutes.
pub const MAX_CLOCK_SKEW_MINUTES: i64 = 10;

/// Query parameters, encoded sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<&'static str, String>,
}

impl Query {
    /// A query carrying the parameters every call sends.
    pub fn authenticated(token: &str) -> Self {
        let mut query = Self::default();
        query.set("format", "json");
        query.set("auth_token", token);
        query
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.params.insert(key, value.into());
    }

    pub fn set_opt(&mut self, key: &'static str, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Tri-state boolean: unset is omitted, otherwise `"yes"` / `"no"`.
    pub fn set_flag(&mut self, key: &'static str, value: Option<bool>) {
        if let Some(value) = value {
            self.set(key, yes_no(value));
        }
    }

    /// Space-joined tags; nothing is sent for an empty list.
    pub fn set_tags(&mut self, key: &'static str, tags: &[String]) {
        if !tags.is_empty() {
            self.set(key, join_tags(tags));
        }
    }

    pub fn set_time(&mut self, key: &'static str, value: Option<&DateTime<Utc>>) {
        self.set_opt(key, value.map(format_time));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn encode(&self) -> String {
        self.encode_with(|_, value| urlencoding::encode(value).into_owned())
    }

    /// Encoded form with the auth token masked, for logging.
    pub fn redacted(&self) -> String {
        self.encode_with(|key, value| {
            if key == "auth_token" {
                "REDACTED".to_string()
            } else {
                urlencoding::encode(value).into_owned()
            }
        })
    }

    fn encode_with(&self, mut value_of: impl FnMut(&str, &str) -> String) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{key}={}", value_of(key, value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// RFC 3339 in UTC with second precision, e.g. `2023-03-10T01:32:09Z`.
pub fn format_time(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn check_tag_limit(tags: &[String], max: usize) -> Result<(), Error> {
    if tags.len() > max {
        return Err(Error::invalid(format!(
            "tags must be less than or equal to {max}"
        )));
    }
    Ok(())
}

pub fn check_not_ahead(timestamp: &DateTime<Utc>, now: DateTime<Utc>) -> Result<(), Error> {
    if *timestamp > now + Duration::minutes(MAX_CLOCK_SKEW_MINUTES) {
        return Err(Error::invalid(format!(
            "timestamp must be less than or equal to {MAX_CLOCK_SKEW_MINUTES} minutes ahead of server time"
        )));
    }
    Ok(())
}

/// Returns the value when present and not blank.
pub fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingField { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tag{i}")).collect()
    }

    #[test]
    fn test_authenticated_query_has_format_and_token() {
        let query = Query::authenticated("user:abc123");
        assert_eq!(query.encode(), "auth_token=user%3Aabc123&format=json");
    }

    #[test]
    fn test_flags_are_tri_state() {
        let mut query = Query::default();
        query.set_flag("replace", None);
        query.set_flag("shared", Some(true));
        query.set_flag("toread", Some(false));
        assert!(!query.contains("replace"));
        assert_eq!(query.get("shared"), Some("yes"));
        assert_eq!(query.get("toread"), Some("no"));
    }

    #[test]
    fn test_tags_are_space_joined_and_encoded() {
        let mut query = Query::default();
        query.set_tags("tag", &["rust".to_string(), "c++".to_string()]);
        assert_eq!(query.get("tag"), Some("rust c++"));
        assert_eq!(query.encode(), "tag=rust%20c%2B%2B");

        let mut empty = Query::default();
        empty.set_tags("tag", &[]);
        assert!(!empty.contains("tag"));
    }

    #[test]
    fn test_redacted_hides_token() {
        let query = Query::authenticated("secret");
        assert_eq!(query.redacted(), "auth_token=REDACTED&format=json");
    }

    #[test]
    fn test_format_time() {
        let time = Utc.with_ymd_and_hms(2023, 3, 10, 1, 32, 9).unwrap();
        assert_eq!(format_time(&time), "2023-03-10T01:32:09Z");
    }

    #[test]
    fn test_tag_limit() {
        assert!(check_tag_limit(&tags(3), MAX_FILTER_TAGS).is_ok());
        assert!(matches!(
            check_tag_limit(&tags(4), MAX_FILTER_TAGS),
            Err(Error::InvalidInput(_))
        ));
        assert!(check_tag_limit(&tags(100), MAX_BOOKMARK_TAGS).is_ok());
        assert!(check_tag_limit(&tags(101), MAX_BOOKMARK_TAGS).is_err());
    }

    #[test]
    fn test_clock_skew_boundary() {
        let now = Utc.with_ymd_and_hms(2023, 3, 10, 12, 0, 0).unwrap();
        assert!(check_not_ahead(&(now + Duration::minutes(10)), now).is_ok());
        assert!(check_not_ahead(&(now - Duration::days(365)), now).is_ok());
        assert!(matches!(
            check_not_ahead(&(now + Duration::minutes(10) + Duration::seconds(1)), now),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_required() {
        assert_eq!(required(Some("x"), "id").unwrap(), "x");
        assert!(matches!(
            required(None, "id"),
            Err(Error::MissingField { field: "id" })
        ));
        assert!(matches!(
            required(Some("  "), "id"),
            Err(Error::MissingField { field: "id" })
        ));
    }
}
