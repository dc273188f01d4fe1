//! Web-client utility layer: a JSON-over-HTTP request helper plus the
//! form-validation helpers that travelled with it.
//!
//! # Overview
//! `ApiClient` performs one network call per invocation and normalizes the
//! outcome into a single decoded `serde_json::Value` or a single
//! `RequestError`. Four convenience entry points (`get`/`post`/`put`/
//! `delete`) are fixed-method specializations of `request` with no extra
//! logic.
//!
//! # Design
//! - `ApiClient` is stateless — calls are independent, unordered, and safe to
//!   run concurrently; there is no shared mutable state, no retry, and no
//!   built-in timeout.
//! - Network execution goes through the `Transport` trait so the underlying
//!   HTTP client is swappable; production uses `ReqwestTransport`, tests use
//!   stubs and a local mock server.
//! - `HttpRequest`/`HttpResponse` use owned plain-data fields so the
//!   transport contract stays free of any HTTP library's types.
//! - Every failure is logged (one line naming the method, URL and error) and
//!   then propagated unchanged.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod validate;

pub use client::ApiClient;
pub use error::{RequestError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
