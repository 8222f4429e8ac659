//! Pinboard client: configuration, request dispatch and response checks.
//!
//! # Design
//! `Client` is built once from a [`ClientConfig`]; the token and endpoint are
//! validated there and never again. Each API call then runs the same
//! pipeline: validate input, build the [`Query`], resolve the path through
//! the [`Registry`], execute one GET on the injected [`Transport`], decode
//! the body, and apply the operation's success policy. Validation failures
//! return before the transport is touched.
//!
//! The operations themselves live in [`posts`](crate::posts),
//! [`notes`](crate::notes), [`tags`](crate::tags) and [`user`](crate::user).

use std::fmt;

use chrono::{DateTime, Utc};
use log::Level;
use url::Url;

use crate::decode::{decode_body, Decode};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::logging::{self, Logger};
use crate::query::Query;
use crate::registry::{Operation, Registry, SuccessField};
use crate::types::ApiResult;

/// Construction parameters for [`Client`].
///
/// Unset fields fall back to the registry's defaults.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Pinboard API token (`user:HEX`). Required.
    pub token: Option<String>,
    /// Root URL override, e.g. a local test server.
    pub endpoint: Option<String>,
    /// User-Agent override.
    pub user_agent: Option<String>,
    pub registry: Registry,
    /// Destination for client log records. `None` keeps the client silent.
    pub logger: Option<Logger>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("user_agent", &self.user_agent)
            .field("registry", &self.registry)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }
}

/// Synchronous Pinboard API client over an injected transport.
pub struct Client<T> {
    transport: T,
    token: String,
    endpoint: Url,
    user_agent: String,
    registry: Registry,
    logger: Logger,
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Client<T> {
    pub fn new(config: ClientConfig, transport: T) -> Result<Self, Error> {
        let token = match config.token {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Err(Error::NoToken),
        };

        let raw_endpoint = config
            .endpoint
            .unwrap_or_else(|| config.registry.endpoint().to_string());
        let endpoint = Url::parse(&raw_endpoint).map_err(|source| Error::BadEndpoint {
            endpoint: raw_endpoint.clone(),
            source,
        })?;

        let user_agent = config
            .user_agent
            .unwrap_or_else(|| config.registry.user_agent());

        Ok(Self {
            transport,
            token,
            endpoint,
            user_agent,
            registry: config.registry,
            logger: config.logger.unwrap_or_else(logging::silent),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn query(&self) -> Query {
        Query::authenticated(&self.token)
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Resolve, dispatch and decode a call whose path is the registry path.
    pub(crate) fn call<R: Decode>(&self, op: Operation, query: &Query) -> Result<R, Error> {
        self.call_with_suffix(op, None, query)
    }

    /// Like [`Client::call`], appending `/{suffix}` to the registry path.
    pub(crate) fn call_with_suffix<R: Decode>(
        &self,
        op: Operation,
        suffix: Option<&str>,
        query: &Query,
    ) -> Result<R, Error> {
        let mut path = self.registry.path(op)?.to_string();
        if let Some(suffix) = suffix {
            path.push('/');
            path.push_str(&urlencoding::encode(suffix));
        }

        let response = self.dispatch(op, &path, query)?;
        decode_body(&response.body).map_err(|cause| {
            logging::emit(
                self.logger.as_ref(),
                Level::Error,
                format_args!("op={op} error={cause} msg=\"error unmarshalling response\""),
            );
            Error::UnmarshalResponse {
                body: response.body,
                cause,
            }
        })
    }

    /// [`Client::call`] for mutating operations, applying the success policy.
    pub(crate) fn call_checked(&self, op: Operation, query: &Query) -> Result<ApiResult, Error> {
        let result: ApiResult = self.call(op, query)?;
        check_success(op, result)
    }

    fn dispatch(&self, op: Operation, path: &str, query: &Query) -> Result<HttpResponse, Error> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("{base}{path}?{}", query.encode()),
            headers: vec![("User-Agent".to_string(), self.user_agent.clone())],
        };

        logging::emit(
            self.logger.as_ref(),
            Level::Debug,
            format_args!(
                "op={op} url=\"{base}{path}?{}\" msg=\"calling endpoint\"",
                query.redacted()
            ),
        );

        let response = self.transport.execute(&request).map_err(|source| {
            logging::emit(
                self.logger.as_ref(),
                Level::Error,
                format_args!(
                    "op={op} endpoint={base} path={path} error={source} msg=\"error calling endpoint\""
                ),
            );
            Error::Transport(source)
        })?;

        if !response.is_success() {
            logging::emit(
                self.logger.as_ref(),
                Level::Error,
                format_args!(
                    "op={op} endpoint={base} path={path} status={} msg=\"bad status code\"",
                    response.status
                ),
            );
            return Err(Error::BadStatusCode {
                code: response.status,
                status: response.reason,
            });
        }

        Ok(response)
    }
}

/// Apply the per-operation success policy to a decoded acknowledgment.
pub fn check_success(op: Operation, result: ApiResult) -> Result<ApiResult, Error> {
    let value = match op.success_field() {
        None => return Ok(result),
        Some(SuccessField::Result) => result.result.as_deref(),
        Some(SuccessField::ResultCode) => result.result_code.as_deref(),
    };
    if value == Some("done") {
        return Ok(result);
    }
    Err(Error::UnexpectedResponse {
        result_code: value.unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    struct NoNetwork;

    impl Transport for NoNetwork {
        fn execute(&self, _: &HttpRequest) -> Result<HttpResponse, TransportError> {
            Err("no network in unit tests".into())
        }
    }

    #[test]
    fn test_new_requires_token() {
        let err = Client::new(ClientConfig::default(), NoNetwork).unwrap_err();
        assert!(matches!(err, Error::NoToken));

        let err = Client::new(ClientConfig::new("  "), NoNetwork).unwrap_err();
        assert!(matches!(err, Error::NoToken));
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let config = ClientConfig::new("user:abc").with_endpoint("not a url");
        let err = Client::new(config, NoNetwork).unwrap_err();
        assert!(matches!(err, Error::BadEndpoint { ref endpoint, .. } if endpoint == "not a url"));
    }

    #[test]
    fn test_new_applies_defaults() {
        let client = Client::new(ClientConfig::new("user:abc"), NoNetwork).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://api.pinboard.in/v1");
        assert_eq!(client.user_agent(), Registry::new().user_agent());
    }

    #[test]
    fn test_endpoint_from_registry() {
        let mut registry = Registry::new();
        registry.set_endpoint("http://127.0.0.1:9999/v1");
        let client = Client::new(
            ClientConfig::new("user:abc")
                .with_registry(registry)
                .with_user_agent("test/1.0"),
            NoNetwork,
        )
        .unwrap();
        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:9999/v1");
        assert_eq!(client.user_agent(), "test/1.0");
    }

    #[test]
    fn test_transport_failure_is_wrapped() {
        let client = Client::new(ClientConfig::new("user:abc"), NoNetwork).unwrap();
        let err = client.call::<ApiResult>(Operation::UserSecret, &client.query()).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn test_check_success_policy() {
        let done_code = ApiResult {
            result: None,
            result_code: Some("done".into()),
        };
        assert!(check_success(Operation::PostsDelete, done_code.clone()).is_ok());

        // `result` is ignored for bookmark mutations
        let err = check_success(
            Operation::PostsAdd,
            ApiResult {
                result: Some("done".into()),
                result_code: Some("missing url".into()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse { ref result_code } if result_code == "missing url"));

        let err = check_success(Operation::TagsDelete, done_code).unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse { ref result_code } if result_code.is_empty()));

        let secret = ApiResult {
            result: Some("0417237f06a144c09a5c".into()),
            result_code: None,
        };
        assert!(check_success(Operation::UserSecret, secret).is_ok());
    }
}
