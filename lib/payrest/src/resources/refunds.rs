use payrest_core::Transport;
use serde_json::Value;

use crate::{ApiClient, Refund, Result, routes};

/// Refund lookups. Refunds are created through
/// [`PaymentClient::refund`](crate::PaymentClient::refund).
#[derive(Debug)]
pub struct RefundClient<'a, C> {
    api: &'a ApiClient<C>,
}

impl<'a, C: Transport> RefundClient<'a, C> {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: &'a ApiClient<C>) -> Self {
        Self { api }
    }

    /// Fetch one refund.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch(&self, id: &str) -> Result<Refund> {
        self.api.get(routes::REFUND, &[id], None).await
    }

    /// List refunds across all payments.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch_all(&self, request: Option<&Value>) -> Result<Vec<Refund>> {
        self.api.get_collection(routes::REFUNDS, &[], request).await
    }
}
