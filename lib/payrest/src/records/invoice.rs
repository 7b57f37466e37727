use payrest_core::{Envelope, Record, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An invoice, or a payment link issued as an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier, e.g. `inv_DAweOiQ7amIUVd`.
    pub id: String,
    /// Total in the smallest currency unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// ISO currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// `draft`, `issued`, `partially_paid`, `paid`, `cancelled` or `expired`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `invoice` or `link`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Customer the invoice is addressed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Order created for the invoice once issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Merchant reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    /// Public short link to the hosted invoice page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unix timestamp of creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Invoice {
    const ENTITY: &'static str = "invoice";

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        envelope.into_record(Self::ENTITY)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use payrest_core::Error;
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_fields_land_in_extra() {
        let envelope = Envelope::try_from(json!({
            "entity": "invoice",
            "id": "inv_1",
            "amount": 500,
            "type": "link",
            "line_items": [{"name": "Book", "amount": 500}]
        }))
        .expect("object");

        let invoice = Invoice::from_envelope(envelope).expect("invoice");
        check!(invoice.id == "inv_1");
        check!(invoice.amount == Some(500));
        check!(invoice.kind.as_deref() == Some("link"));
        check!(invoice.extra.contains_key("line_items"));
        check!(!invoice.extra.contains_key("entity"));
        check!(invoice.entity() == "invoice");
    }

    #[test]
    fn missing_id_is_a_construction_error() {
        let envelope = Envelope::try_from(json!({"entity": "invoice", "amount": 1})).expect("object");
        let_assert!(Err(Error::RecordConstruction { entity, .. }) = Invoice::from_envelope(envelope));
        check!(entity == "invoice");
    }
}
