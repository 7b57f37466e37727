//! Per-resource façades over [`crate::ApiClient`].
//!
//! Each façade borrows the dispatcher and fixes the route and response shape
//! of every operation, so callers only supply ids and request documents.

mod customers;
mod invoices;
mod orders;
mod payments;
mod refunds;

pub use customers::CustomerClient;
pub use invoices::InvoiceClient;
pub use orders::OrderClient;
pub use payments::PaymentClient;
pub use refunds::RefundClient;
