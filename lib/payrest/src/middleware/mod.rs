//! Tower middleware layers for [`crate::HyperTransport`].
//!
//! Layers are applied in the order they are added to the builder: the first
//! one added is the outermost and sees the request first.
//!
//! # Available Layers
//!
//! - [`BasicAuthLayer`] - Sends the API key pair as `Authorization: Basic`
//! - [`LoggingLayer`] - Logs exchanges using `tracing`
//! - [`RetryPolicy`] - Retry policy for [`RetryLayer`], idempotent requests only
//!
//! # Example
//!
//! ```ignore
//! use payrest::HyperTransport;
//!
//! let transport = HyperTransport::builder()
//!     .with_logging()
//!     .with_basic_auth("rzp_test_key", "secret")
//!     .with_retry(2)
//!     .build();
//! ```

mod basic_auth;
mod logging;
mod retry;

pub use basic_auth::{BasicAuth, BasicAuthLayer};
pub use logging::{LogLevel, Logging, LoggingLayer};
pub use retry::RetryPolicy;

// Re-export tower types for convenience
pub use tower::retry::RetryLayer;
pub use tower::{Layer, ServiceBuilder};
