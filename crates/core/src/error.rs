//! Error taxonomy for the Pinboard client.
//!
//! Every failure a [`Client`](crate::Client) call can produce is a variant of
//! [`Error`]. Callers that only care about the category can match on
//! [`Error::kind`] instead of the variant payloads.

use thiserror::Error as ThisError;

use crate::registry::Operation;

/// Boxed error produced by a [`Transport`](crate::Transport) implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("no token provided")]
    NoToken,

    #[error("endpoint is not valid: {endpoint}")]
    BadEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("input is not valid: {0}")]
    InvalidInput(String),

    #[error("missing input: {field}")]
    MissingField { field: &'static str },

    #[error("requested operation is not known or defined: {0}")]
    UnknownOperation(String),

    #[error("requested operation path is not set or empty: {0}")]
    OperationPathNotSet(Operation),

    #[error("endpoint returned a bad status code: {code} {status}")]
    BadStatusCode { code: u16, status: String },

    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    #[error("failed to unmarshal response: {cause}")]
    UnmarshalResponse {
        body: Vec<u8>,
        #[source]
        cause: DecodeError,
    },

    #[error("unexpected response: {result_code}")]
    UnexpectedResponse { result_code: String },
}

/// Discriminant of [`Error`], for callers that switch on the category only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoToken,
    BadEndpoint,
    InvalidInput,
    MissingField,
    UnknownOperation,
    OperationPathNotSet,
    BadStatusCode,
    Transport,
    UnmarshalResponse,
    UnexpectedResponse,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoToken => ErrorKind::NoToken,
            Error::BadEndpoint { .. } => ErrorKind::BadEndpoint,
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::MissingField { .. } => ErrorKind::MissingField,
            Error::UnknownOperation(_) => ErrorKind::UnknownOperation,
            Error::OperationPathNotSet(_) => ErrorKind::OperationPathNotSet,
            Error::BadStatusCode { .. } => ErrorKind::BadStatusCode,
            Error::Transport(_) => ErrorKind::Transport,
            Error::UnmarshalResponse { .. } => ErrorKind::UnmarshalResponse,
            Error::UnexpectedResponse { .. } => ErrorKind::UnexpectedResponse,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Reasons a response body failed to decode into its typed shape.
#[derive(Debug, ThisError)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("field `{field}`: expected {expected}, found {found}")]
    FieldType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field `{field}`: invalid timestamp {value:?}")]
    Timestamp {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("field `{field}`: invalid count {value:?}")]
    Count { field: String, value: String },

    #[error("note count {count} does not match {actual} notes returned")]
    CountMismatch { count: u64, actual: usize },
}
