//! Transport seam: the part that actually performs the network exchange.
//!
//! # Design
//! `ApiClient` never talks to the network directly; it goes through the
//! [`Transport`] trait so the underlying HTTP client can be swapped, and so
//! tests can observe outbound request shapes and inject canned responses. A
//! transport must return non-2xx responses as ordinary data — interpreting
//! status codes is the client's job — and reserve its error for exchanges
//! that never completed at all.

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Asynchronous HTTP transport abstraction.
///
/// Anything that accepts a plain [`HttpRequest`] and yields a plain
/// [`HttpResponse`] qualifies; the helper does not care what executes the
/// exchange.
pub trait Transport: Send + Sync {
    /// Execute one HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no response was obtained: DNS
    /// failure, refused or aborted connection, unparseable URL, or a body
    /// read that broke off mid-transfer.
    fn execute(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Production transport backed by `reqwest`.
///
/// Holds one `reqwest::Client` (and with it a connection pool); cloning is
/// cheap and shares the pool. No timeout is configured — a caller wanting one
/// wraps the call externally and drops the in-flight future.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(into_transport_error)?;

        // Capture the status line and headers before text() consumes the body.
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(into_transport_error)?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            headers,
            body,
        })
    }
}

fn into_transport_error(err: reqwest::Error) -> TransportError {
    TransportError::new(err.to_string())
}
