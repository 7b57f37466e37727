//! HTTP response handling.
//!
//! [`Response`] is what a [`crate::Transport`] hands back: status, headers and
//! the fully buffered body. Dispatch reads it, never consumes it.

use std::collections::HashMap;

use bytes::Bytes;

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Status is exactly `200`, the only status dispatch accepts.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == crate::STATUS_OK
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

impl Response<Bytes> {
    /// Get the response body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        let response = Response::new(200, headers, Bytes::from(r#"{"entity":"invoice"}"#));

        check!(response.status() == 200);
        check!(response.header("content-type") == Some("application/json"));
        check!(response.is_ok());
        check!(!response.is_server_error());
        check!(response.text() == r#"{"entity":"invoice"}"#);
    }

    #[test]
    fn only_200_is_ok() {
        check!(!Response::new(201, HashMap::new(), Bytes::new()).is_ok());
        check!(!Response::new(204, HashMap::new(), Bytes::new()).is_ok());
        check!(Response::new(503, HashMap::new(), Bytes::new()).is_server_error());
    }
}
