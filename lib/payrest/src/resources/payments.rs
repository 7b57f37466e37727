use payrest_core::Transport;
use serde_json::Value;

use crate::{ApiClient, Payment, Refund, Result, routes};

/// Payment operations.
#[derive(Debug)]
pub struct PaymentClient<'a, C> {
    api: &'a ApiClient<C>,
}

impl<'a, C: Transport> PaymentClient<'a, C> {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: &'a ApiClient<C>) -> Self {
        Self { api }
    }

    /// Fetch one payment.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch(&self, id: &str) -> Result<Payment> {
        self.api.get(routes::PAYMENT, &[id], None).await
    }

    /// List payments, optionally filtered (`from`, `to`, `count`, `skip`).
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch_all(&self, request: Option<&Value>) -> Result<Vec<Payment>> {
        self.api.get_collection(routes::PAYMENTS, &[], request).await
    }

    /// Capture an authorized payment. The request carries `amount` and `currency`.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn capture(&self, id: &str, request: &Value) -> Result<Payment> {
        self.api
            .post(routes::PAYMENT_CAPTURE, &[id], Some(request))
            .await
    }

    /// Refund a captured payment; without a request the full amount is refunded.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn refund(&self, id: &str, request: Option<&Value>) -> Result<Refund> {
        self.api.post(routes::PAYMENT_REFUND, &[id], request).await
    }

    /// List the refunds of one payment.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch_refunds(&self, id: &str) -> Result<Vec<Refund>> {
        self.api
            .get_collection(routes::PAYMENT_REFUNDS, &[id], None)
            .await
    }
}
