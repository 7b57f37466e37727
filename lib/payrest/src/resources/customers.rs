use payrest_core::Transport;
use serde_json::Value;

use crate::{ApiClient, Customer, Result, routes};

/// Customer operations.
#[derive(Debug)]
pub struct CustomerClient<'a, C> {
    api: &'a ApiClient<C>,
}

impl<'a, C: Transport> CustomerClient<'a, C> {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: &'a ApiClient<C>) -> Self {
        Self { api }
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn create(&self, request: &Value) -> Result<Customer> {
        self.api.post(routes::CUSTOMERS, &[], Some(request)).await
    }

    /// Fetch one customer.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch(&self, id: &str) -> Result<Customer> {
        self.api.get(routes::CUSTOMER, &[id], None).await
    }

    /// List customers.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch_all(&self, request: Option<&Value>) -> Result<Vec<Customer>> {
        self.api.get_collection(routes::CUSTOMERS, &[], request).await
    }
}
