//! Exchange logging middleware.
//!
//! Logs each HTTP exchange using the `tracing` crate. Entries carry the
//! route template, so that `invoices/{id}` groups together regardless of the
//! id. The concrete URL, query included, is only logged at debug level.

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{Error, PathTemplate, Request, Response, Result};

/// Layer that adds exchange logging.
///
/// # Example
///
/// ```ignore
/// use payrest::middleware::LoggingLayer;
/// use tower::ServiceBuilder;
///
/// let service = ServiceBuilder::new()
///     .layer(LoggingLayer::new())
///     .service(transport);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Log level for the logging middleware.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogLevel {
    /// Log at debug level, including the response size.
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

impl LoggingLayer {
    /// Create a new logging layer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging layer that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = Logging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// The route template, or the bare URL path for untemplated requests.
///
/// Never includes the query string, which may carry customer filters.
fn route(request: &Request<Bytes>) -> Cow<'static, str> {
    request.extensions().get::<PathTemplate>().map_or_else(
        || Cow::Owned(request.url().path().to_string()),
        |template| Cow::Borrowed(template.as_str()),
    )
}

/// Service that logs exchanges.
#[derive(Debug, Clone)]
pub struct Logging<S> {
    inner: S,
    level: LogLevel,
}

impl<S> Service<Request<Bytes>> for Logging<S>
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
        let method = request.method();
        let url = request.url().to_string();
        let route = route(&request);
        let level = self.level;

        let span = span!(Level::INFO, "payrest_request", %method, %route);

        let mut inner = self.inner.clone();
        Box::pin(
            async move {
                let start = Instant::now();
                match level {
                    LogLevel::Debug => debug!(%url, "sending request"),
                    LogLevel::Info => info!("sending request"),
                }

                let result = inner.call(request).await;
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(response) if response.is_ok() => match level {
                        LogLevel::Debug => {
                            debug!(
                                status = response.status(),
                                bytes = response.body().len(),
                                elapsed_ms,
                                "request completed"
                            );
                        }
                        LogLevel::Info => info!(status = response.status(), elapsed_ms, "request completed"),
                    },
                    Ok(response) => {
                        warn!(status = response.status(), elapsed_ms, "request rejected");
                    }
                    Err(err) => {
                        warn!(error = %err, elapsed_ms, "request failed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}
