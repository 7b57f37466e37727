//! Transport trait.
//!
//! The dispatcher does not open sockets. It hands a fully built [`Request`]
//! to a [`Transport`] and dispatches whatever [`Response`] comes back.
//! `payrest::HyperTransport` is the production implementation; tests plug in
//! canned responses.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Executes one HTTP exchange.
///
/// Implementations own connection handling, TLS, credentials and retries.
/// Any failure to obtain a response must be reported as
/// [`crate::Error::Transport`], including timeouts and cancellation.
pub trait Transport: Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Transport`] if no response could be obtained.
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        T::execute(self, request)
    }
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        T::execute(self, request)
    }
}
