use payrest_core::{Envelope, Record, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A full or partial refund of a captured payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    /// Unique identifier, e.g. `rfnd_FP8QHiV938haTz`.
    pub id: String,
    /// Refunded payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Amount in the smallest currency unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// ISO currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// `pending`, `processed` or `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Merchant reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    /// Unix timestamp of creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Refund {
    const ENTITY: &'static str = "refund";

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        envelope.into_record(Self::ENTITY)
    }
}
