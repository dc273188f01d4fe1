//! Plain-data HTTP types shared between the client and the transport.
//!
//! # Design
//! These types describe one HTTP exchange as plain data. `ApiClient` assembles
//! an `HttpRequest`, hands it to a [`Transport`](crate::transport::Transport)
//! implementation, and interprets the `HttpResponse` that comes back. Keeping
//! the contract free of any HTTP library's types means a transport can be
//! swapped (or stubbed in tests) without touching the client.
//!
//! All fields use owned types (`String`, `Vec`); a request descriptor is
//! built fresh per call and never retained.

use std::fmt;

/// HTTP method for a request. Only the four verbs the helper exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient` from the caller's url/method/body/headers; the body,
/// when present, is already encoded as JSON text. The transport executes this
/// request as-is, including URL parsing — the client does not validate URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport once the exchange completes, whatever the
/// status code. `status_text` is the generic reason phrase for the status
/// ("Not Found", "Internal Server Error", ...), empty when the code has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the success range (200–299).
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            status_text: String::new(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn ok_covers_exactly_the_2xx_range() {
        assert!(!response(199).ok());
        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(response(299).ok());
        assert!(!response(300).ok());
        assert!(!response(404).ok());
        assert!(!response(500).ok());
    }

    #[test]
    fn method_names_match_the_wire_form() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
