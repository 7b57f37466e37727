//! Body serialization utilities.

use bytes::Bytes;

use crate::{Error, Result};

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use payrest_core::to_json;
/// use serde_json::json;
///
/// let bytes = to_json(&json!({"amount": 500})).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"amount":500}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Serialize a flat document to a query string.
///
/// Uses `serde_html_form`, so sequences become repeated parameters. Nested
/// objects are rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidRequest`] if the document cannot be encoded.
///
/// # Example
///
/// ```
/// use payrest_core::to_query_string;
/// use serde_json::json;
///
/// let query = to_query_string(&json!({"count": 5, "from": 1600000000})).expect("serialize");
/// assert_eq!(query, "count=5&from=1600000000");
/// ```
pub fn to_query_string<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_html_form::to_string(value).map_err(|e| Error::invalid_request(e.to_string()))
}

/// Deserialize a response body with path-aware error messages.
///
/// Failures are reported as [`Error::MalformedResponse`] with the JSON path
/// of the offending value.
///
/// # Example
///
/// ```
/// use payrest_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Count { count: u32 }
///
/// let count: Count = from_json(br#"{"count":3}"#).expect("deserialize");
/// assert_eq!(count, Count { count: 3 });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| Error::malformed(e.path().to_string(), e.inner().to_string()))
}
