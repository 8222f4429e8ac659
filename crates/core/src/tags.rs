//! `/tags/*` operations.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::http::Transport;
use crate::query::{required, Query};
use crate::registry::Operation;
use crate::types::{ApiResult, Tags};

/// Input for `tags/rename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsRenameInput {
    pub old: Option<String>,
    pub new: Option<String>,
}

impl TagsRenameInput {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: Some(old.into()),
            new: Some(new.into()),
        }
    }

    pub fn apply(&self, mut query: Query) -> Result<Query, Error> {
        let old = required(self.old.as_deref(), "old")?;
        let new = required(self.new.as_deref(), "new")?;
        query.set("old", old);
        query.set("new", new);
        Ok(query)
    }
}

impl<T: Transport> Client<T> {
    /// Every tag in the account with its bookmark count.
    pub fn tags_get(&self) -> Result<Tags, Error> {
        self.call(Operation::TagsGet, &self.query())
    }

    /// Remove `tag` from every bookmark.
    pub fn tags_delete(&self, tag: &str) -> Result<ApiResult, Error> {
        let mut query = self.query();
        query.set("tag", required(Some(tag), "tag")?);
        self.call_checked(Operation::TagsDelete, &query)
    }

    /// Rename a tag across every bookmark. Matching is case-insensitive on
    /// the server.
    pub fn tags_rename(&self, input: &TagsRenameInput) -> Result<ApiResult, Error> {
        let query = input.apply(self.query())?;
        self.call_checked(Operation::TagsRename, &query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_checks_old_before_new() {
        let err = TagsRenameInput::default()
            .apply(Query::default())
            .unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "old" }));

        let input = TagsRenameInput {
            old: Some("rust".into()),
            new: Some(" ".into()),
        };
        let err = input.apply(Query::default()).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "new" }));
    }

    #[test]
    fn test_rename_query() {
        let query = TagsRenameInput::new("golang", "go")
            .apply(Query::default())
            .unwrap();
        assert_eq!(query.encode(), "new=go&old=golang");
    }
}
