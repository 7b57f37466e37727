//! API key authentication middleware.
//!
//! The payment API authenticates every call with HTTP basic auth, using the
//! key id as user name and the key secret as password. This layer only
//! attaches the pair it is given.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use base64::Engine;
use bytes::Bytes;
use tower::{Layer, Service};

use crate::{Error, Request, Response, Result};

fn encode(key_id: &str, key_secret: &str) -> Arc<str> {
    let credentials = format!("{key_id}:{key_secret}");
    Arc::from(base64::engine::general_purpose::STANDARD.encode(credentials))
}

/// Layer that authenticates requests with an API key pair.
///
/// # Example
///
/// ```ignore
/// use payrest::middleware::BasicAuthLayer;
/// use tower::ServiceBuilder;
///
/// let service = ServiceBuilder::new()
///     .layer(BasicAuthLayer::new("rzp_test_key", "secret"))
///     .service(transport);
/// ```
#[derive(Clone)]
pub struct BasicAuthLayer {
    key_id: Arc<str>,
    /// Base64-encoded "`key_id`:`key_secret`".
    encoded_credentials: Arc<str>,
}

impl BasicAuthLayer {
    /// Create a new layer for the given key pair.
    pub fn new(key_id: impl AsRef<str>, key_secret: impl AsRef<str>) -> Self {
        Self {
            key_id: Arc::from(key_id.as_ref()),
            encoded_credentials: encode(key_id.as_ref(), key_secret.as_ref()),
        }
    }
}

impl fmt::Debug for BasicAuthLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthLayer")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl<S> Layer<S> for BasicAuthLayer {
    type Service = BasicAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BasicAuth {
            inner,
            key_id: Arc::clone(&self.key_id),
            encoded_credentials: Arc::clone(&self.encoded_credentials),
        }
    }
}

/// Service that authenticates requests with an API key pair.
#[derive(Clone)]
pub struct BasicAuth<S> {
    inner: S,
    key_id: Arc<str>,
    encoded_credentials: Arc<str>,
}

impl<S> fmt::Debug for BasicAuth<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl<S> Service<Request<Bytes>> for BasicAuth<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let (method, url, mut headers, body, extensions) = request.into_parts();
        headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", self.encoded_credentials),
        );
        let request = Request::from_parts(method, url, headers, body, extensions);

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}
