//! Core types for the payrest payment API client.
//!
//! This crate turns raw HTTP exchanges into typed records without doing any
//! I/O itself:
//! - [`Envelope`] - the untyped JSON object a response carries
//! - [`Record`] - a concrete resource built from one envelope
//! - [`Registry`] - closed table from type tag to record constructor
//! - [`dispatch`] - single-record and collection dispatch of a [`Response`]
//! - [`ErrorTranslator`] and [`VendorErrorTranslator`] - non-200 handling
//! - [`Error`] and [`Result`] - the unified error taxonomy
//! - [`Transport`] - the seam to an actual HTTP client
//! - [`Request`], [`RequestBuilder`], [`Method`], [`PathTemplate`] - request plumbing

mod body;
pub mod dispatch;
mod envelope;
mod error;
mod method;
mod path_template;
pub mod prelude;
mod record;
mod registry;
mod request;
mod response;
mod transport;

pub use body::{from_json, to_json, to_query_string};
pub use dispatch::{
    STATUS_OK, parse_collection, parse_record, process_collection_response,
    process_record_response,
};
pub use envelope::{COLLECTION_TAG, ENTITY_KEY, Envelope, ITEMS_KEY};
pub use error::{Error, ErrorTranslator, Result, TransportErrorKind, VendorErrorTranslator};
pub use method::Method;
pub use path_template::PathTemplate;
pub use record::Record;
pub use registry::{Constructor, Registry};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use transport::Transport;
