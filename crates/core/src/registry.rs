//! Endpoint registry: operation names, their paths, and root configuration.
//!
//! The registry is plain data. Tests mutate it (for instance clearing a path
//! to simulate a disabled endpoint) before handing it to a client.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Library identifier used to derive the default user agent.
pub const LIBRARY_ID: &str = "github.com/cloudbridgeuy/thumbtack";

/// Default Pinboard API root.
pub const DEFAULT_ENDPOINT: &str = "https://api.pinboard.in/v1";

/// Every API capability the client knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    PostsAdd,
    PostsAll,
    PostsDates,
    PostsDelete,
    PostsGet,
    PostsRecent,
    PostsSuggest,
    PostsUpdate,
    UserSecret,
    NotesById,
    NotesList,
    TagsGet,
    TagsDelete,
    TagsRename,
}

/// Which field of a [`Result`](crate::types::Result) carries `"done"` on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessField {
    Result,
    ResultCode,
}

impl Operation {
    pub const ALL: [Operation; 14] = [
        Operation::PostsAdd,
        Operation::PostsAll,
        Operation::PostsDates,
        Operation::PostsDelete,
        Operation::PostsGet,
        Operation::PostsRecent,
        Operation::PostsSuggest,
        Operation::PostsUpdate,
        Operation::UserSecret,
        Operation::NotesById,
        Operation::NotesList,
        Operation::TagsGet,
        Operation::TagsDelete,
        Operation::TagsRename,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::PostsAdd => "PostsAdd",
            Operation::PostsAll => "PostsAll",
            Operation::PostsDates => "PostsDates",
            Operation::PostsDelete => "PostsDelete",
            Operation::PostsGet => "PostsGet",
            Operation::PostsRecent => "PostsRecent",
            Operation::PostsSuggest => "PostsSuggest",
            Operation::PostsUpdate => "PostsUpdate",
            Operation::UserSecret => "UserSecret",
            Operation::NotesById => "NotesById",
            Operation::NotesList => "NotesList",
            Operation::TagsGet => "TagsGet",
            Operation::TagsDelete => "TagsDelete",
            Operation::TagsRename => "TagsRename",
        }
    }

    pub fn default_path(self) -> &'static str {
        match self {
            Operation::PostsAdd => "/posts/add",
            Operation::PostsAll => "/posts/all",
            Operation::PostsDates => "/posts/dates",
            Operation::PostsDelete => "/posts/delete",
            Operation::PostsGet => "/posts/get",
            Operation::PostsRecent => "/posts/recent",
            Operation::PostsSuggest => "/posts/suggest",
            Operation::PostsUpdate => "/posts/update",
            Operation::UserSecret => "/user/secret",
            Operation::NotesById => "/notes",
            Operation::NotesList => "/notes/list",
            Operation::TagsGet => "/tags/get",
            Operation::TagsDelete => "/tags/delete",
            Operation::TagsRename => "/tags/rename",
        }
    }

    /// Success policy for mutating operations.
    ///
    /// Pinboard is not uniform here: bookmark mutations report through
    /// `result_code`, tag mutations through `result`. Read-only operations
    /// return `None` and are not checked.
    pub fn success_field(self) -> Option<SuccessField> {
        match self {
            Operation::PostsAdd | Operation::PostsDelete => Some(SuccessField::ResultCode),
            Operation::TagsDelete | Operation::TagsRename => Some(SuccessField::Result),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

/// Operation paths plus endpoint root, version and user agent.
#[derive(Debug, Clone)]
pub struct Registry {
    paths: HashMap<Operation, String>,
    endpoint: String,
    version: String,
    user_agent: Option<String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            paths: Operation::ALL
                .into_iter()
                .map(|op| (op, op.default_path().to_string()))
                .collect(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            user_agent: None,
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a path by operation name.
    pub fn get(&self, name: &str) -> Result<&str, Error> {
        self.path(name.parse()?)
    }

    /// Set a path by operation name. Only the name is validated.
    pub fn set(&mut self, name: &str, path: impl Into<String>) -> Result<(), Error> {
        let op: Operation = name.parse()?;
        self.set_path(op, path);
        Ok(())
    }

    pub fn path(&self, op: Operation) -> Result<&str, Error> {
        match self.paths.get(&op) {
            Some(path) if !path.trim().is_empty() => Ok(path.as_str()),
            _ => Err(Error::OperationPathNotSet(op)),
        }
    }

    pub fn set_path(&mut self, op: Operation, path: impl Into<String>) {
        self.paths.insert(op, path.into());
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    /// The configured user agent, or `"{LIBRARY_ID}@v{version}"`.
    pub fn user_agent(&self) -> String {
        match &self.user_agent {
            Some(ua) => ua.clone(),
            None => format!("{LIBRARY_ID}@v{}", self.version),
        }
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = Some(user_agent.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_has_a_default_path() {
        let registry = Registry::new();
        for op in Operation::ALL {
            assert_eq!(registry.path(op).unwrap(), op.default_path());
        }
        assert_eq!(registry.get("PostsAdd").unwrap(), "/posts/add");
        assert_eq!(registry.get("NotesById").unwrap(), "/notes");
    }

    #[test]
    fn test_unknown_operation() {
        let registry = Registry::new();
        let err = registry.get("PostsFoo").unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(ref name) if name == "PostsFoo"));
    }

    #[test]
    fn test_set_unknown_operation_fails() {
        let mut registry = Registry::new();
        let err = registry.set("NopeNope", "/nope").unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(_)));
    }

    #[test]
    fn test_cleared_path_is_not_set() {
        let mut registry = Registry::new();
        registry.set("PostsAdd", "").unwrap();
        let err = registry.get("PostsAdd").unwrap_err();
        assert!(matches!(err, Error::OperationPathNotSet(Operation::PostsAdd)));

        registry.set_path(Operation::TagsGet, "   ");
        assert!(matches!(
            registry.path(Operation::TagsGet),
            Err(Error::OperationPathNotSet(Operation::TagsGet))
        ));
    }

    #[test]
    fn test_set_path_overrides() {
        let mut registry = Registry::new();
        registry.set("PostsRecent", "/v2/posts/recent").unwrap();
        assert_eq!(registry.get("PostsRecent").unwrap(), "/v2/posts/recent");
    }

    #[test]
    fn test_user_agent_is_derived_from_version() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.user_agent(),
            format!("{LIBRARY_ID}@v{}", env!("CARGO_PKG_VERSION"))
        );

        registry.set_version("9.9.9");
        assert_eq!(registry.version(), "9.9.9");
        assert_eq!(registry.user_agent(), format!("{LIBRARY_ID}@v9.9.9"));

        registry.set_user_agent("test/1.0");
        assert_eq!(registry.user_agent(), "test/1.0");
    }

    #[test]
    fn test_endpoint() {
        let mut registry = Registry::new();
        assert_eq!(registry.endpoint(), DEFAULT_ENDPOINT);
        registry.set_endpoint("http://localhost:8080");
        assert_eq!(registry.endpoint(), "http://localhost:8080");
    }

    #[test]
    fn test_success_policy() {
        assert_eq!(
            Operation::PostsDelete.success_field(),
            Some(SuccessField::ResultCode)
        );
        assert_eq!(
            Operation::TagsRename.success_field(),
            Some(SuccessField::Result)
        );
        assert_eq!(Operation::UserSecret.success_field(), None);
    }

    #[test]
    fn test_operation_round_trips_through_name() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }
}
