//! Prelude module for convenient imports.
//!
//! ```ignore
//! use payrest::prelude::*;
//! ```

pub use crate::{
    ApiClient, ClientConfig, Customer, Entity, Error, ErrorTranslator, HyperTransport, Invoice,
    Order, PayClient, Payment, Record, Refund, Result, Transport,
};
