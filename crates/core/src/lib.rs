//! Core library for thumbtack
//!
//! This crate implements the **Functional Core** of the thumbtack Pinboard
//! client, following the Functional Core - Imperative Shell pattern.
//!
//! # Architecture Overview
//!
//! - **`thumbtack_core`** (this crate): request building, validation,
//!   response decoding and the success policy. No network I/O.
//! - **`thumbtack`**: the CLI. It owns the HTTP stack and the process logger
//!   and injects both into a [`Client`].
//!
//! Every call follows the same pipeline: validate input, build the query,
//! resolve the path through the [`Registry`], execute one GET on the
//! [`Transport`], decode the body, and check the acknowledgment for
//! mutating operations.
//!
//! # Module Organization
//!
//! - [`client`]: configuration and the shared dispatch pipeline
//! - [`registry`]: operation names, paths, endpoint and version
//! - [`posts`], [`notes`], [`tags`], [`user`]: one method per API operation
//! - [`types`]: decoded response models
//! - [`decode`]: tolerant JSON extractors shared by the models
//! - [`query`]: query-string encoding and input validators
//! - [`http`]: the transport seam
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use thumbtack_core::{Client, ClientConfig, PostsRecentInput};
//!
//! let client = Client::new(ClientConfig::new("user:ABC123"), transport)?;
//! let recent = client.posts_recent(&PostsRecentInput {
//!     count: Some(5),
//!     ..PostsRecentInput::default()
//! })?;
//! for bookmark in recent.posts {
//!     println!("{} {}", bookmark.href, bookmark.description);
//! }
//! ```

pub mod client;
pub mod decode;
pub mod error;
pub mod http;
pub mod logging;
pub mod notes;
pub mod posts;
pub mod query;
pub mod registry;
pub mod tags;
pub mod types;
pub mod user;

pub use client::{check_success, Client, ClientConfig};
pub use decode::{join_tags, split_tags};
pub use error::{DecodeError, Error, ErrorKind, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use logging::Logger;
pub use posts::{PostsAddInput, PostsAllInput, PostsGetInput, PostsRecentInput};
pub use registry::{Operation, Registry, SuccessField, DEFAULT_ENDPOINT, LIBRARY_ID};
pub use tags::TagsRenameInput;
pub use types::{ApiResult, Bookmark, Dates, Note, Notes, Posts, Suggestions, Tags, UpdateTime};
