//! The response dispatcher.
//!
//! [`ApiClient`] binds a [`Transport`] to an API root and turns each exchange
//! into an [`Entity`], a sequence of them, or an [`Error`]. It performs no
//! retries of its own; whatever policy the transport carries applies.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use payrest_core::{
    ErrorTranslator, Method, PathTemplate, Record, Request, Response, Transport,
    VendorErrorTranslator, process_collection_response, process_record_response,
};
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::{Entity, Error, Result, registry};

/// Dispatcher over any [`Transport`].
///
/// The untyped operations take a path relative to the API root and an
/// optional request document. For `GET` the document is sent as query
/// parameters, for `POST` as a JSON body (`{}` when absent).
///
/// # Example
///
/// ```ignore
/// use payrest::{ApiClient, Entity, HyperTransport};
///
/// let transport = HyperTransport::builder()
///     .with_basic_auth("rzp_test_key", "secret")
///     .build();
/// let api = ApiClient::new(transport, "https://api.razorpay.com/v1/")?;
///
/// if let Entity::Invoice(invoice) = api.fetch_one("invoices/inv_1", None).await? {
///     println!("{:?}", invoice.amount);
/// }
/// ```
pub struct ApiClient<C> {
    transport: C,
    base_url: Url,
    translator: Arc<dyn ErrorTranslator>,
}

impl<C: Clone> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
            translator: Arc::clone(&self.translator),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for ApiClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("transport", &self.transport)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl<C> ApiClient<C> {
    /// Create a dispatcher rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn new(transport: C, base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self::with_url(transport, base_url))
    }

    /// Create a dispatcher with a pre-parsed URL.
    ///
    /// A trailing `/` is added to the path if missing, so that routes
    /// extend the root instead of replacing its last segment.
    #[must_use]
    pub fn with_url(transport: C, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            transport,
            base_url,
            translator: Arc::new(VendorErrorTranslator),
        }
    }

    /// Replace the translator used for non-200 responses.
    #[must_use]
    pub fn with_translator(mut self, translator: impl ErrorTranslator) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    /// The API root.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &C {
        &self.transport
    }

    /// Resolve `path` under the API root.
    ///
    /// Absolute URLs and `..` segments that leave the root are rejected, so
    /// credentials attached by the transport only ever reach the API.
    fn url(&self, path: &str) -> Result<Url> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(Error::invalid_request(format!(
                "`{path}` resolves outside of `{}`",
                self.base_url
            )));
        }
        Ok(url)
    }
}

impl<C: Transport> ApiClient<C> {
    // ========================================================================
    // Untyped dispatch
    // ========================================================================

    /// `GET` a single record.
    ///
    /// # Errors
    ///
    /// Any failure of the exchange or of dispatch, see [`Error`].
    pub async fn fetch_one(&self, path: &str, request: Option<&Value>) -> Result<Entity> {
        let response = self.exchange(Method::Get, path, None, request).await?;
        self.record(&response)
    }

    /// `GET` a collection of records, in server order.
    ///
    /// # Errors
    ///
    /// Any failure of the exchange or of dispatch. A single bad item fails
    /// the whole call.
    pub async fn fetch_many(&self, path: &str, request: Option<&Value>) -> Result<Vec<Entity>> {
        let response = self.exchange(Method::Get, path, None, request).await?;
        self.collection(&response)
    }

    /// `POST` a request document and dispatch the single record returned.
    ///
    /// # Errors
    ///
    /// Any failure of the exchange or of dispatch, see [`Error`].
    pub async fn submit(&self, path: &str, request: Option<&Value>) -> Result<Entity> {
        let response = self.exchange(Method::Post, path, None, request).await?;
        self.record(&response)
    }

    // ========================================================================
    // Typed dispatch
    // ========================================================================

    /// `GET` a single record of type `T`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::fetch_one`], plus [`Error::UnparsableResponse`] when
    /// the server returns a record of another type.
    pub async fn get<T>(
        &self,
        route: PathTemplate,
        params: &[&str],
        request: Option<&Value>,
    ) -> Result<T>
    where
        T: Record + TryFrom<Entity, Error = Entity>,
    {
        let path = route.render(params)?;
        let response = self.exchange(Method::Get, &path, Some(route), request).await?;
        narrow(self.record(&response)?)
    }

    /// `POST` to a route and return the record of type `T`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::submit`], plus [`Error::UnparsableResponse`] when the
    /// server returns a record of another type.
    pub async fn post<T>(
        &self,
        route: PathTemplate,
        params: &[&str],
        request: Option<&Value>,
    ) -> Result<T>
    where
        T: Record + TryFrom<Entity, Error = Entity>,
    {
        let path = route.render(params)?;
        let response = self.exchange(Method::Post, &path, Some(route), request).await?;
        narrow(self.record(&response)?)
    }

    /// `GET` a collection whose members are all of type `T`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::fetch_many`]. A member of another type fails the whole
    /// call with [`Error::UnparsableResponse`].
    pub async fn get_collection<T>(
        &self,
        route: PathTemplate,
        params: &[&str],
        request: Option<&Value>,
    ) -> Result<Vec<T>>
    where
        T: Record + TryFrom<Entity, Error = Entity>,
    {
        let path = route.render(params)?;
        let response = self.exchange(Method::Get, &path, Some(route), request).await?;
        self.collection(&response)?.into_iter().map(narrow).collect()
    }

    // ========================================================================
    // Exchange
    // ========================================================================

    async fn exchange(
        &self,
        method: Method,
        path: &str,
        route: Option<PathTemplate>,
        document: Option<&Value>,
    ) -> Result<Response<Bytes>> {
        let mut builder = Request::<Bytes>::builder(method, self.url(path)?)
            .header("Accept", "application/json");
        if let Some(route) = route {
            builder = builder.extension(route);
        }

        let builder = match (method, document) {
            (Method::Get, Some(document)) => builder.query(document)?,
            (Method::Get, None) => builder,
            (Method::Post, Some(document)) => builder.json(document)?,
            (Method::Post, None) => builder.json(&Map::<String, Value>::new())?,
        };
        let request = builder.build();

        debug!(%method, url = %request.url(), "dispatching request");
        self.transport.execute(request).await
    }

    fn record(&self, response: &Response<Bytes>) -> Result<Entity> {
        process_record_response(response, registry(), self.translator.as_ref())
    }

    fn collection(&self, response: &Response<Bytes>) -> Result<Vec<Entity>> {
        process_collection_response(response, registry(), self.translator.as_ref())
    }
}

fn narrow<T>(entity: Entity) -> Result<T>
where
    T: Record + TryFrom<Entity, Error = Entity>,
{
    T::try_from(entity).map_err(|other| {
        Error::unparsable(format!(
            "expected entity `{}`, found `{}`",
            T::ENTITY,
            other.entity()
        ))
    })
}
