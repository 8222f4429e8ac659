//! HTTP transport seam.
//!
//! The core never touches the network. It builds an [`HttpRequest`] and
//! hands it to a caller-supplied [`Transport`], which returns the status and
//! raw body as an [`HttpResponse`].

use crate::error::TransportError;

/// HTTP method for a request. Pinboard's v1 API is GET only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Full URL including the query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase, e.g. `"Unauthorized"`.
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            reason: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single request. Implementations must not retry.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}
