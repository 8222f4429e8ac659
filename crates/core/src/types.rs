//! Pinboard data model.
//!
//! Every type here is transient: decoded from a response, handed to the
//! caller, never persisted. Wire examples are kept next to each decoder.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::decode::{self, as_array, as_object, Decode};
use crate::error::DecodeError;

/// A single bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    /// URL of the bookmark (`href`).
    pub href: String,
    /// Title of the bookmark; Pinboard calls it `description`.
    pub description: String,
    /// Longer description; Pinboard calls it `extended`.
    pub extended: String,
    /// Change detection signature.
    pub meta: String,
    /// MD5 of the URL.
    pub hash: String,
    pub time: Option<DateTime<Utc>>,
    pub shared: bool,
    pub toread: bool,
    pub tags: Vec<String>,
}

// {"href":"https://example.com","description":"Example","extended":"",
//  "meta":"2bb3...","hash":"7231...","time":"2023-03-08T03:58:53Z",
//  "shared":"no","toread":"yes","tags":"tag1 tag2 tag3"}
impl Decode for Bookmark {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        Ok(Bookmark {
            href: decode::string(obj, "href")?,
            description: decode::string(obj, "description")?,
            extended: decode::string(obj, "extended")?,
            meta: decode::string(obj, "meta")?,
            hash: decode::string(obj, "hash")?,
            time: decode::rfc3339(obj, "time")?,
            shared: decode::yes_no(obj, "shared")?,
            toread: decode::yes_no(obj, "toread")?,
            tags: decode::tags(obj, "tags")?,
        })
    }
}

impl Decode for Vec<Bookmark> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        as_array(value)?.iter().map(Bookmark::decode).collect()
    }
}

/// Bookmarks for a single day, as returned by `posts/get` and `posts/recent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Posts {
    pub date: Option<DateTime<Utc>>,
    pub user: String,
    pub posts: Vec<Bookmark>,
}

impl Decode for Posts {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        let posts = match obj.get("posts") {
            None | Some(Value::Null) => Vec::new(),
            Some(posts) => Vec::<Bookmark>::decode(posts)?,
        };
        Ok(Posts {
            date: decode::rfc3339(obj, "date")?,
            user: decode::string(obj, "user")?,
            posts,
        })
    }
}

/// Number of bookmarks per day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dates {
    pub user: String,
    pub tag: String,
    pub dates: BTreeMap<NaiveDate, u64>,
}

// {"user":"someone","tag":"","dates":{"2023-03-19":4,"2023-03-12":"1"}}
impl Decode for Dates {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        let mut dates = BTreeMap::new();
        match obj.get("dates") {
            None | Some(Value::Null) => {}
            // PHP encodes an empty map as an empty list
            Some(Value::Array(items)) if items.is_empty() => {}
            Some(raw) => {
                for (day, count) in as_object(raw)? {
                    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|source| {
                        DecodeError::Timestamp {
                            field: "dates".to_string(),
                            value: day.clone(),
                            source,
                        }
                    })?;
                    dates.insert(date, decode::count(day, count)?);
                }
            }
        }
        Ok(Dates {
            user: decode::string(obj, "user")?,
            tag: decode::string(obj, "tag")?,
            dates,
        })
    }
}

/// A single note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: String,
    pub hash: String,
    pub title: String,
    /// Length of the note body in bytes.
    pub length: u64,
    /// Body text. Empty in list responses.
    pub text: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

// {"id":"1e5467e342662e6c239c","hash":"e652910a03859fd9e80a","title":"Test Note 01",
//  "length":40,"text":"...","created_at":"2023-03-19 14:35:16","updated_at":"2023-03-19 14:35:16"}
impl Decode for Note {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        Ok(Note {
            id: decode::string(obj, "id")?,
            hash: decode::string(obj, "hash")?,
            title: decode::string(obj, "title")?,
            length: decode::count_field(obj, "length")?,
            text: decode::string(obj, "text")?,
            created_at: decode::note_time(obj, "created_at")?,
            updated_at: decode::note_time(obj, "updated_at")?,
        })
    }
}

/// The user's notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notes {
    pub count: u64,
    pub notes: Vec<Note>,
}

impl Decode for Notes {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        let notes = match obj.get("notes") {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => as_array(raw)?
                .iter()
                .map(Note::decode)
                .collect::<Result<Vec<_>, _>>()?,
        };
        let count = decode::count_field(obj, "count")?;
        if count != notes.len() as u64 {
            return Err(DecodeError::CountMismatch {
                count,
                actual: notes.len(),
            });
        }
        Ok(Notes { count, notes })
    }
}

/// Tag name to usage count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    pub tags: BTreeMap<String, u64>,
    /// Number of distinct tags; derived from `tags`.
    pub count: usize,
}

// {"books":1,"custom":"1","haproxy":2}
impl Decode for Tags {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let tags = match value {
            Value::Array(items) if items.is_empty() => BTreeMap::new(),
            other => as_object(other)?
                .iter()
                .map(|(name, count)| Ok((name.clone(), decode::count(name, count)?)))
                .collect::<Result<BTreeMap<_, _>, DecodeError>>()?,
        };
        Ok(Tags {
            count: tags.len(),
            tags,
        })
    }
}

/// Generic acknowledgment.
///
/// ```text
/// {"result":"done"}
/// {"result":"0417237f06a144c09a5c"}
/// {"result_code":"missing url"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,
}

impl Decode for ApiResult {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        let optional = |field: &str| -> Result<Option<String>, DecodeError> {
            match obj.get(field) {
                None | Some(Value::Null) => Ok(None),
                Some(_) => decode::string(obj, field).map(Some),
            }
        };
        Ok(ApiResult {
            result: optional("result")?,
            result_code: optional("result_code")?,
        })
    }
}

/// Popular and recommended tags for a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub popular: Vec<String>,
    pub recommended: Vec<String>,
}

// [{"popular":["fonts","css"]},{"recommended":["typography","web"]}]
impl Decode for Suggestions {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let parts: Vec<&Value> = match value {
            Value::Array(items) => items.iter().collect(),
            Value::Object(_) => vec![value],
            other => {
                return Err(DecodeError::Shape {
                    expected: "array",
                    found: decode::kind_of(other),
                })
            }
        };

        let mut suggestions = Suggestions::default();
        for part in parts {
            let obj = as_object(part)?;
            if obj.contains_key("popular") {
                suggestions.popular = decode::string_list(obj, "popular")?;
            }
            if obj.contains_key("recommended") {
                suggestions.recommended = decode::string_list(obj, "recommended")?;
            }
        }
        Ok(suggestions)
    }
}

/// Most recent time a bookmark was added, updated or deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTime {
    pub update_time: Option<DateTime<Utc>>,
}

// {"update_time":"2023-03-19T15:57:02Z"}
impl Decode for UpdateTime {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        Ok(UpdateTime {
            update_time: decode::rfc3339(obj, "update_time")?,
        })
    }
}
