//! Prelude module for convenient imports.
//!
//! ```ignore
//! use payrest_core::prelude::*;
//! ```

pub use crate::{
    Envelope, Error, ErrorTranslator, Method, PathTemplate, Record, Registry, Request, Response,
    Result, Transport,
};
