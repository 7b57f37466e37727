//! Error types for payrest.

use bytes::Bytes;
use derive_more::{Display, Error, From};
use serde::Deserialize;

// ============================================================================
// Error Translator Trait
// ============================================================================

/// Trait for turning a non-success HTTP exchange into an [`Error`].
///
/// The translator receives the HTTP status code and the raw response body.
/// It never fails: whatever the body looks like, a structured error comes out.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use payrest_core::{Error, ErrorTranslator};
///
/// struct TeapotAware;
///
/// impl ErrorTranslator for TeapotAware {
///     fn translate(&self, status: u16, body: &Bytes) -> Error {
///         if status == 418 {
///             return Error::api(status, "TEAPOT", "short and stout");
///         }
///         payrest_core::VendorErrorTranslator.translate(status, body)
///     }
/// }
///
/// let err = TeapotAware.translate(418, &Bytes::new());
/// assert_eq!(err.to_string(), "TEAPOT:short and stout");
/// ```
pub trait ErrorTranslator: Send + Sync + 'static {
    /// Translate a non-200 exchange into a structured error.
    fn translate(&self, status: u16, body: &Bytes) -> Error;
}

/// Translator for the vendor error envelope.
///
/// A body shaped like `{"error": {"code": "...", "description": "..."}}`
/// becomes [`Error::Api`]. Anything else, including bodies that are not JSON
/// at all, becomes [`Error::Server`] carrying the raw body text.
#[derive(Debug, Clone, Copy, Default)]
pub struct VendorErrorTranslator;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: VendorError,
}

#[derive(Deserialize)]
struct VendorError {
    code: String,
    description: String,
}

impl ErrorTranslator for VendorErrorTranslator {
    fn translate(&self, status: u16, body: &Bytes) -> Error {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { error }) => Error::api(status, error.code, error.description),
            Err(_) => Error::server(status, String::from_utf8_lossy(body)),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// What went wrong below the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransportErrorKind {
    /// The connection could not be established or was dropped.
    #[display("connection")]
    Connection,
    /// TLS handshake or certificate failure.
    #[display("TLS")]
    Tls,
    /// The exchange did not complete in time, or was cancelled.
    #[display("timeout")]
    Timeout,
    /// The response body could not be read.
    #[display("body")]
    Body,
}

/// Main error type for payrest operations.
///
/// Every dispatch failure lands in exactly one of these variants.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// No usable response came back from the transport.
    #[display("{kind} error: {message}")]
    #[from(skip)]
    Transport {
        /// Failure category.
        kind: TransportErrorKind,
        /// Underlying reason.
        message: String,
    },

    /// The body is not a well-formed JSON document.
    #[display("malformed response at '{path}': {message}")]
    #[from(skip)]
    MalformedResponse {
        /// JSON path to the failure, empty for syntax errors.
        path: String,
        /// Parser message.
        message: String,
    },

    /// The document does not have the expected envelope shape.
    #[display("unable to parse response: {_0}")]
    #[from(skip)]
    UnparsableResponse(#[error(not(source))] String),

    /// The `entity` tag has no registered record type.
    #[display("unknown entity `{_0}`")]
    #[from(skip)]
    UnknownEntity(#[error(not(source))] String),

    /// The envelope was recognised but its fields do not fit the record.
    #[display("unable to build `{entity}` at '{path}': {message}")]
    #[from(skip)]
    RecordConstruction {
        /// Type tag of the record being built.
        entity: String,
        /// JSON path to the offending field.
        path: String,
        /// Deserializer message.
        message: String,
    },

    /// Non-200 response carrying a vendor error object.
    #[display("{code}:{description}")]
    #[from(skip)]
    Api {
        /// HTTP status code.
        status: u16,
        /// Vendor error code, e.g. `BAD_REQUEST_ERROR`.
        code: String,
        /// Human readable description.
        description: String,
    },

    /// Non-200 response without a recognisable vendor error object.
    #[display("Status Code: {status}\nServer response: {body}")]
    #[from(skip)]
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request could not be assembled.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a transport error.
    #[must_use]
    pub fn transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }

    /// Create a connection-level transport error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::transport(TransportErrorKind::Connection, message)
    }

    /// Create a timeout transport error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::transport(TransportErrorKind::Timeout, message)
    }

    /// Create a malformed response error.
    #[must_use]
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unparsable response error.
    #[must_use]
    pub fn unparsable(message: impl Into<String>) -> Self {
        Self::UnparsableResponse(message.into())
    }

    /// Create an unknown entity error.
    #[must_use]
    pub fn unknown_entity(tag: impl Into<String>) -> Self {
        Self::UnknownEntity(tag.into())
    }

    /// Create a record construction error.
    #[must_use]
    pub fn record_construction(
        entity: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::RecordConstruction {
            entity: entity.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a vendor API error.
    #[must_use]
    pub fn api(status: u16, code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            description: description.into(),
        }
    }

    /// Create a raw server error.
    #[must_use]
    pub fn server(status: u16, body: impl Into<String>) -> Self {
        Self::Server {
            status,
            body: body.into(),
        }
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if no response was obtained.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns `true` if this is a timeout (or cancellation).
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                kind: TransportErrorKind::Timeout,
                ..
            }
        )
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                kind: TransportErrorKind::Connection,
                ..
            }
        )
    }

    /// Returns the HTTP status code for [`Error::Api`] and [`Error::Server`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the vendor error code, if any.
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn api_error_renders_code_and_description() {
        let body = Bytes::from(r#"{"error":{"code":"BAD_REQUEST","description":"x"}}"#);
        let err = VendorErrorTranslator.translate(400, &body);

        let_assert!(Error::Api { status, code, .. } = &err);
        check!(*status == 400);
        check!(code == "BAD_REQUEST");
        check!(err.to_string() == "BAD_REQUEST:x");
    }

    #[test]
    fn api_error_ignores_extra_vendor_fields() {
        let body = Bytes::from(
            r#"{"error":{"code":"BAD_REQUEST_ERROR","description":"The amount must be atleast INR 1.00","field":"amount","source":"business"}}"#,
        );
        let err = VendorErrorTranslator.translate(400, &body);

        check!(err.api_code() == Some("BAD_REQUEST_ERROR"));
        check!(err.to_string() == "BAD_REQUEST_ERROR:The amount must be atleast INR 1.00");
    }

    #[test]
    fn server_error_keeps_raw_body() {
        let body = Bytes::from(r#"{"message":"boom"}"#);
        let err = VendorErrorTranslator.translate(500, &body);

        let_assert!(Error::Server { status: 500, .. } = &err);
        check!(err.to_string() == "Status Code: 500\nServer response: {\"message\":\"boom\"}");
    }

    #[test]
    fn server_error_for_non_json_body() {
        let body = Bytes::from("<html>Bad Gateway</html>");
        let err = VendorErrorTranslator.translate(502, &body);

        check!(err.to_string() == "Status Code: 502\nServer response: <html>Bad Gateway</html>");
        check!(err.is_server_error());
    }

    #[test]
    fn incomplete_error_object_falls_back_to_server_error() {
        let body = Bytes::from(r#"{"error":{"code":"BAD_REQUEST"}}"#);
        let err = VendorErrorTranslator.translate(400, &body);

        check!(matches!(err, Error::Server { status: 400, .. }));
        check!(err.is_client_error());
    }

    #[test]
    fn error_predicates() {
        check!(Error::timeout("elapsed").is_timeout());
        check!(Error::timeout("elapsed").is_transport());
        check!(Error::connection("refused").is_connection());
        check!(!Error::unparsable("no entity").is_transport());
        check!(Error::unknown_entity("foo").status() == None);
        check!(Error::api(404, "NOT_FOUND", "gone").status() == Some(404));
    }

    #[test]
    fn error_display() {
        check!(Error::connection("refused").to_string() == "connection error: refused");
        check!(Error::unknown_entity("widget").to_string() == "unknown entity `widget`");
        check!(
            Error::record_construction("invoice", "amount", "invalid type").to_string()
                == "unable to build `invoice` at 'amount': invalid type"
        );
    }
}
