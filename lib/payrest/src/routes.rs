//! Route templates, relative to the API root.

use payrest_core::PathTemplate;

pub const INVOICES: PathTemplate = PathTemplate::new("invoices");
pub const INVOICE: PathTemplate = PathTemplate::new("invoices/{id}");
pub const INVOICE_ISSUE: PathTemplate = PathTemplate::new("invoices/{id}/issue");
pub const INVOICE_CANCEL: PathTemplate = PathTemplate::new("invoices/{id}/cancel");

pub const PAYMENTS: PathTemplate = PathTemplate::new("payments");
pub const PAYMENT: PathTemplate = PathTemplate::new("payments/{id}");
pub const PAYMENT_CAPTURE: PathTemplate = PathTemplate::new("payments/{id}/capture");
pub const PAYMENT_REFUND: PathTemplate = PathTemplate::new("payments/{id}/refund");
pub const PAYMENT_REFUNDS: PathTemplate = PathTemplate::new("payments/{id}/refunds");

pub const REFUNDS: PathTemplate = PathTemplate::new("refunds");
pub const REFUND: PathTemplate = PathTemplate::new("refunds/{id}");

pub const ORDERS: PathTemplate = PathTemplate::new("orders");
pub const ORDER: PathTemplate = PathTemplate::new("orders/{id}");
pub const ORDER_PAYMENTS: PathTemplate = PathTemplate::new("orders/{id}/payments");

pub const CUSTOMERS: PathTemplate = PathTemplate::new("customers");
pub const CUSTOMER: PathTemplate = PathTemplate::new("customers/{id}");
