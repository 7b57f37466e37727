use payrest_core::Transport;
use serde_json::Value;

use crate::{ApiClient, Invoice, Result, routes};

/// Invoice operations.
#[derive(Debug)]
pub struct InvoiceClient<'a, C> {
    api: &'a ApiClient<C>,
}

impl<'a, C: Transport> InvoiceClient<'a, C> {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: &'a ApiClient<C>) -> Self {
        Self { api }
    }

    /// Create an invoice, or a payment link with `"type": "link"`.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn create(&self, request: &Value) -> Result<Invoice> {
        self.api.post(routes::INVOICES, &[], Some(request)).await
    }

    /// Fetch one invoice.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch(&self, id: &str) -> Result<Invoice> {
        self.api.get(routes::INVOICE, &[id], None).await
    }

    /// List invoices, optionally filtered (`type`, `customer_id`, `count`, `skip`, ...).
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn fetch_all(&self, request: Option<&Value>) -> Result<Vec<Invoice>> {
        self.api.get_collection(routes::INVOICES, &[], request).await
    }

    /// Issue a draft invoice.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn issue(&self, id: &str) -> Result<Invoice> {
        self.api.post(routes::INVOICE_ISSUE, &[id], None).await
    }

    /// Cancel an unpaid invoice.
    ///
    /// # Errors
    ///
    /// Any transport, dispatch or API error.
    pub async fn cancel(&self, id: &str) -> Result<Invoice> {
        self.api.post(routes::INVOICE_CANCEL, &[id], None).await
    }
}
