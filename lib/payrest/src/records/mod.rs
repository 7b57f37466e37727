//! Concrete records returned by the payment API.
//!
//! Each record carries the fields callers commonly need as typed members and
//! keeps everything else in `extra`, so no part of the payload is lost.

mod customer;
mod invoice;
mod order;
mod payment;
mod refund;

pub use customer::Customer;
pub use invoice::Invoice;
pub use order::Order;
pub use payment::Payment;
pub use refund::Refund;
