//! HTTP method types.

use derive_more::Display;

/// HTTP request method.
///
/// The payment API only reads with `GET` and writes with `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - fetch one record or a collection.
    #[display("GET")]
    Get,
    /// POST method - create or act on a record.
    #[display("POST")]
    Post,
}

impl Method {
    /// Returns `true` if replaying the request cannot change server state.
    #[must_use]
    pub const fn is_idempotent(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
        }
    }
}

impl TryFrom<http::Method> for Method {
    type Error = crate::Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        match method {
            http::Method::GET => Ok(Self::Get),
            http::Method::POST => Ok(Self::Post),
            other => Err(crate::Error::invalid_request(format!(
                "unsupported HTTP method: {other}"
            ))),
        }
    }
}
