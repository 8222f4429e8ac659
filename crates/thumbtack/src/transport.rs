//! Blocking reqwest implementation of the core transport.

use thumbtack_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

use crate::prelude::*;

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
