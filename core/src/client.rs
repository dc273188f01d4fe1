//! The request helper: one call in, one decoded JSON value (or one error) out.
//!
//! # Design
//! `ApiClient` holds only its transport and carries no mutable state between
//! calls; every call is independent, single-shot, and makes exactly one
//! network attempt. The flow is always the same: encode the body, merge the
//! caller's headers over the defaults, execute through the [`Transport`],
//! then either decode a success body or turn a non-2xx response into a
//! [`RequestError::Status`]. Every failure is logged once and re-raised
//! unchanged — the helper never recovers, retries, or swallows.

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};

/// Headers applied to every request unless the caller overrides them by name.
const DEFAULT_HEADERS: [(&str, &str); 1] = [("content-type", "application/json")];

/// Stateless JSON API client over a pluggable [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Client over the production `reqwest` transport.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for ApiClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    /// Client over a caller-provided transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Perform one HTTP exchange and decode the response body as JSON.
    ///
    /// `headers` are merged over the defaults (currently just
    /// `content-type: application/json`); caller entries win on a name
    /// collision, compared ASCII-case-insensitively. `body`, when present, is
    /// encoded as JSON before anything touches the network. The response body
    /// must be JSON even for DELETE — an empty success body is a decode
    /// error.
    ///
    /// No timeout is imposed and nothing is retried; a caller wanting a
    /// deadline wraps the future (e.g. `tokio::time::timeout`) and drops it.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Encode`] — the body could not be serialized; no
    ///   network call is made.
    /// - [`RequestError::Transport`] — the exchange never completed.
    /// - [`RequestError::Status`] — the server answered with a non-2xx
    ///   status; the message is taken from a `message` field in the error
    ///   body when one decodes, falling back to the generic status text. A
    ///   malformed error body never masks the status.
    /// - [`RequestError::Decode`] — a success body was not valid JSON.
    pub async fn request<B: Serialize>(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&B>,
        headers: &[(String, String)],
    ) -> Result<Value, RequestError> {
        match self.dispatch(url, method, body, headers).await {
            Ok(value) => Ok(value),
            Err(err) => {
                // Diagnostic side effect only; the error goes on unchanged.
                error!("{method} {url} failed: {err}");
                Err(err)
            }
        }
    }

    /// GET `url` and decode the response. Equivalent to
    /// `request(url, HttpMethod::Get, None, headers)`.
    pub async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<Value, RequestError> {
        self.request::<Value>(url, HttpMethod::Get, None, headers).await
    }

    /// POST `body` to `url` and decode the response.
    pub async fn post<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<Value, RequestError> {
        self.request(url, HttpMethod::Post, Some(body), headers).await
    }

    /// PUT `body` to `url` and decode the response.
    pub async fn put<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<Value, RequestError> {
        self.request(url, HttpMethod::Put, Some(body), headers).await
    }

    /// DELETE `url` and decode the response.
    pub async fn delete(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<Value, RequestError> {
        self.request::<Value>(url, HttpMethod::Delete, None, headers).await
    }

    /// The unlogged request flow; `request` wraps this so that every failure
    /// path is logged exactly once.
    async fn dispatch<B: Serialize>(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&B>,
        headers: &[(String, String)],
    ) -> Result<Value, RequestError> {
        let body = match body {
            Some(value) => Some(serde_json::to_string(value).map_err(RequestError::Encode)?),
            None => None,
        };

        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers: merge_headers(headers),
            body,
        };

        let response = self.transport.execute(&request).await?;

        if !response.ok() {
            return Err(RequestError::Status {
                status: response.status,
                message: error_message(&response),
            });
        }

        serde_json::from_str(&response.body).map_err(RequestError::Decode)
    }
}

/// Merge caller headers over the defaults. Caller entries replace a default
/// with the same name (ASCII-case-insensitive); among caller entries sharing
/// a name, later ones win.
fn merge_headers(extra: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = DEFAULT_HEADERS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    for (name, value) in extra {
        match merged
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.clone(),
            None => merged.push((name.clone(), value.clone())),
        }
    }
    merged
}

/// Best-effort message for a non-2xx response: the `message` field of a JSON
/// error body when it is a non-empty string, otherwise the generic status
/// text. A body that fails to decode never masks the status itself.
fn error_message(response: &HttpResponse) -> String {
    serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| response.status_text.clone())
}
