//! `/posts/*` operations.
//!
//! Each input type validates itself and writes its parameters into a
//! [`Query`]; the `Client` methods only sequence that with dispatch and
//! decoding. Validation takes `now` explicitly so the clock-skew rule can be
//! tested without a real clock.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::http::Transport;
use crate::query::{
    check_not_ahead, check_tag_limit, required, yes_no, Query, MAX_BOOKMARK_TAGS, MAX_FILTER_TAGS,
};
use crate::registry::Operation;
use crate::types::{ApiResult, Bookmark, Dates, Posts, Suggestions, UpdateTime};

/// Default number of bookmarks returned by `posts/recent`.
pub const DEFAULT_RECENT_COUNT: u32 = 15;

/// Maximum number of bookmarks returned by `posts/recent`.
pub const MAX_RECENT_COUNT: u32 = 100;

/// Input for `posts/add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsAddInput {
    /// URL of the item. Required.
    pub url: Option<String>,
    /// Title of the item. Required. Sent as `description`.
    pub title: Option<String>,
    /// Longer description. Sent as `extended`.
    pub description: Option<String>,
    /// Replace an existing bookmark with this URL. Server default is yes.
    pub replace: Option<bool>,
    /// Make the bookmark public. Server default depends on account settings.
    pub shared: Option<bool>,
    /// Up to 100 tags.
    pub tags: Vec<String>,
    /// Creation time; at most 10 minutes ahead of now.
    pub timestamp: Option<DateTime<Utc>>,
    /// Mark the bookmark as unread.
    pub to_read: Option<bool>,
}

impl PostsAddInput {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn apply(&self, mut query: Query, now: DateTime<Utc>) -> Result<Query, Error> {
        let url = required(self.url.as_deref(), "url")?;
        let title = required(self.title.as_deref(), "title")?;
        check_tag_limit(&self.tags, MAX_BOOKMARK_TAGS)?;
        if let Some(timestamp) = &self.timestamp {
            check_not_ahead(timestamp, now)?;
        }

        query.set("url", url);
        query.set("description", title);
        query.set_opt("extended", self.description.as_deref());
        query.set_flag("replace", self.replace);
        query.set_flag("shared", self.shared);
        query.set_tags("tags", &self.tags);
        query.set_time("dt", self.timestamp.as_ref());
        query.set_flag("toread", self.to_read);
        Ok(query)
    }
}

/// Input for `posts/all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsAllInput {
    /// Only bookmarks created after this time.
    pub from_dt: Option<DateTime<Utc>>,
    /// Include the change detection signature. Sent as "yes" unless false.
    pub meta: Option<bool>,
    /// Number of results to return. Default is all.
    pub results: Option<u32>,
    /// Offset into the result set.
    pub start: Option<u32>,
    /// Filter by up to three tags.
    pub tags: Vec<String>,
    /// Only bookmarks created before this time.
    pub to_dt: Option<DateTime<Utc>>,
}

impl PostsAllInput {
    pub fn apply(&self, mut query: Query) -> Result<Query, Error> {
        check_tag_limit(&self.tags, MAX_FILTER_TAGS)?;

        query.set_time("fromdt", self.from_dt.as_ref());
        query.set("meta", yes_no(self.meta.unwrap_or(true)));
        query.set_opt("results", self.results.map(|n| n.to_string()));
        query.set_opt("start", self.start.map(|n| n.to_string()));
        query.set_tags("tag", &self.tags);
        query.set_time("todt", self.to_dt.as_ref());
        Ok(query)
    }
}

/// Input for `posts/get`. Without a date or URL the server uses the day of
/// the most recent bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsGetInput {
    /// Return bookmarks saved on this day.
    pub date: Option<NaiveDate>,
    /// Include the change detection signature. Sent as "yes" unless false.
    pub meta: Option<bool>,
    /// Filter by up to three tags.
    pub tags: Vec<String>,
    /// Return only this bookmark.
    pub url: Option<String>,
}

impl PostsGetInput {
    pub fn apply(&self, mut query: Query) -> Result<Query, Error> {
        check_tag_limit(&self.tags, MAX_FILTER_TAGS)?;

        query.set("meta", yes_no(self.meta.unwrap_or(true)));
        query.set_tags("tag", &self.tags);
        query.set_opt("dt", self.date.map(|d| d.format("%Y-%m-%d").to_string()));
        query.set_opt("url", self.url.as_deref());
        Ok(query)
    }
}

/// Input for `posts/recent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsRecentInput {
    /// Number of bookmarks, 1 to 100. Defaults to 15.
    pub count: Option<u32>,
    /// Filter by up to three tags.
    pub tags: Vec<String>,
}

impl PostsRecentInput {
    pub fn apply(&self, mut query: Query) -> Result<Query, Error> {
        let count = self.count.unwrap_or(DEFAULT_RECENT_COUNT);
        if !(1..=MAX_RECENT_COUNT).contains(&count) {
            return Err(Error::invalid(format!(
                "count must be between 1 and {MAX_RECENT_COUNT}"
            )));
        }
        check_tag_limit(&self.tags, MAX_FILTER_TAGS)?;

        query.set("count", count.to_string());
        query.set_tags("tag", &self.tags);
        Ok(query)
    }
}

fn apply_filter_tags(tags: &[String], mut query: Query) -> Result<Query, Error> {
    check_tag_limit(tags, MAX_FILTER_TAGS)?;
    query.set_tags("tag", tags);
    Ok(query)
}

impl<T: Transport> Client<T> {
    /// Add a bookmark. <https://pinboard.in/api/#posts_add>
    pub fn posts_add(&self, input: &PostsAddInput) -> Result<ApiResult, Error> {
        let query = input.apply(self.query(), self.now())?;
        self.call_checked(Operation::PostsAdd, &query)
    }

    /// Every bookmark in the account. <https://pinboard.in/api/#posts_all>
    pub fn posts_all(&self, input: &PostsAllInput) -> Result<Vec<Bookmark>, Error> {
        let query = input.apply(self.query())?;
        self.call(Operation::PostsAll, &query)
    }

    /// Bookmark counts per day, optionally filtered by up to three tags.
    pub fn posts_dates(&self, tags: &[String]) -> Result<Dates, Error> {
        let query = apply_filter_tags(tags, self.query())?;
        self.call(Operation::PostsDates, &query)
    }

    /// Delete the bookmark for `url`.
    pub fn posts_delete(&self, url: &str) -> Result<ApiResult, Error> {
        let mut query = self.query();
        query.set("url", required(Some(url), "url")?);
        self.call_checked(Operation::PostsDelete, &query)
    }

    /// Bookmarks for a single day or URL. <https://pinboard.in/api/#posts_get>
    pub fn posts_get(&self, input: &PostsGetInput) -> Result<Posts, Error> {
        let query = input.apply(self.query())?;
        self.call(Operation::PostsGet, &query)
    }

    pub fn posts_recent(&self, input: &PostsRecentInput) -> Result<Posts, Error> {
        let query = input.apply(self.query())?;
        self.call(Operation::PostsRecent, &query)
    }

    /// Popular and recommended tags for `url`.
    pub fn posts_suggest(&self, url: &str) -> Result<Suggestions, Error> {
        let mut query = self.query();
        query.set("url", required(Some(url), "url")?);
        self.call(Operation::PostsSuggest, &query)
    }

    /// Most recent time a bookmark was added, updated or deleted. Use it
    /// before `posts_all` to see whether anything changed.
    pub fn posts_update(&self) -> Result<UpdateTime, Error> {
        self.call(Operation::PostsUpdate, &self.query())
    }
}
