//! Async client for a payment platform REST API.
//!
//! Responses are dispatched on the `entity` tag they carry: a record
//! envelope becomes one [`Entity`], a collection envelope becomes a
//! `Vec<Entity>`, and anything else becomes a structured [`Error`].
//!
//! # Example
//!
//! ```ignore
//! use payrest::prelude::*;
//! use serde_json::json;
//!
//! let client = PayClient::new("rzp_test_key", "secret")?;
//!
//! let invoice = client
//!     .invoices()
//!     .create(&json!({"type": "link", "amount": 500, "currency": "INR"}))
//!     .await?;
//!
//! match client.api().fetch_one("refunds/rfnd_1", None).await {
//!     Ok(Entity::Refund(refund)) => println!("{:?}", refund.status),
//!     Ok(other) => println!("unexpected {}", other.entity()),
//!     Err(Error::Api { code, .. }) => println!("rejected: {code}"),
//!     Err(err) => return Err(err),
//! }
//! ```

mod api_client;
mod config;
mod connector;
mod entity;
pub mod middleware;
mod pay_client;
pub mod prelude;
pub mod records;
mod resources;
mod routes;
mod transport;

pub use api_client::ApiClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use entity::{Entity, registry};
pub use pay_client::PayClient;
pub use records::{Customer, Invoice, Order, Payment, Refund};
pub use resources::{CustomerClient, InvoiceClient, OrderClient, PaymentClient, RefundClient};
pub use transport::{BoxedService, HyperTransport, HyperTransportBuilder, ServiceFuture};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use payrest_core::{
    Envelope, Error, ErrorTranslator, Method, PathTemplate, Record, Registry, Request,
    RequestBuilder, Response, Result, Transport, TransportErrorKind, VendorErrorTranslator,
};
