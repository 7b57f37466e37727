use payrest_core::Transport;
use serde_json::Value;

use crate::{ApiClient, Order, Payment, Result, routes};

/// Order operations.
#[derive(Debug)]
pub struct OrderClient<'a, C> {
    api: &'a ApiClient<C>,
}

impl<'a, C: Transport> OrderClient<'a, C> {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: &'a ApiClient<C>) -> Self {
        Self { api }
    }

    /// Create an order.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn create(&self, request: &Value) -> Result<Order> {
        self.api.post(routes::ORDERS, &[], Some(request)).await
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch(&self, id: &str) -> Result<Order> {
        self.api.get(routes::ORDER, &[id], None).await
    }

    /// List orders.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch_all(&self, request: Option<&Value>) -> Result<Vec<Order>> {
        self.api.get_collection(routes::ORDERS, &[], request).await
    }

    /// List the payments made against an order.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch_payments(&self, id: &str) -> Result<Vec<Payment>> {
        self.api
            .get_collection(routes::ORDER_PAYMENTS, &[id], None)
            .await
    }
}
