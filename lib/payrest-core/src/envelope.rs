//! The generic response document.
//!
//! An [`Envelope`] is a JSON object as the server sent it, before any type is
//! attached to it. A success response is either a *record envelope*
//!
//! ```json
//! {"entity": "invoice", "id": "inv_1", "amount": 500}
//! ```
//!
//! or a *collection envelope*
//!
//! ```json
//! {"entity": "collection", "count": 1, "items": [{"entity": "invoice", "id": "inv_1"}]}
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Key holding the type tag.
pub const ENTITY_KEY: &str = "entity";

/// Key holding the members of a collection envelope.
pub const ITEMS_KEY: &str = "items";

/// Type tag of a collection envelope.
pub const COLLECTION_TAG: &str = "collection";

/// A parsed JSON object from a response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Map<String, Value>);

impl Envelope {
    /// Wrap an existing JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Parse a response body.
    ///
    /// Anything that is not a JSON object is a [`Error::MalformedResponse`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        crate::from_json(bytes)
    }

    /// Raw field lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the field is present, even when `null`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Borrow the underlying object.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying object.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// The type tag.
    ///
    /// A missing or non-string `entity` is an [`Error::UnparsableResponse`].
    pub fn tag(&self) -> Result<&str> {
        match self.0.get(ENTITY_KEY) {
            Some(Value::String(tag)) => Ok(tag),
            Some(other) => Err(Error::unparsable(format!(
                "`{ENTITY_KEY}` must be a string, got {other}"
            ))),
            None => Err(Error::unparsable(format!("missing `{ENTITY_KEY}` field"))),
        }
    }

    /// Returns `true` for a collection envelope.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self.0.get(ENTITY_KEY), Some(Value::String(tag)) if tag == COLLECTION_TAG)
    }

    /// Split a collection envelope into its member envelopes, in order.
    pub fn into_items(mut self) -> Result<Vec<Self>> {
        if !self.is_collection() {
            return Err(Error::unparsable(format!(
                "expected a `{COLLECTION_TAG}` envelope"
            )));
        }

        let Some(Value::Array(items)) = self.0.remove(ITEMS_KEY) else {
            return Err(Error::unparsable(format!(
                "collection without an `{ITEMS_KEY}` array"
            )));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(Self(fields)),
                other => Err(Error::unparsable(format!(
                    "{ITEMS_KEY}[{index}] is not an object: {other}"
                ))),
            })
            .collect()
    }

    /// Deserialize the record fields into `T`.
    ///
    /// The `entity` key is dropped first, since the tag has already been used
    /// to pick `T`. Failures carry the JSON path of the offending field.
    pub fn into_record<T: DeserializeOwned>(mut self, entity: &str) -> Result<T> {
        self.0.remove(ENTITY_KEY);
        serde_path_to_error::deserialize(Value::Object(self.0)).map_err(|e| {
            Error::record_construction(entity, e.path().to_string(), e.inner().to_string())
        })
    }
}

impl From<Map<String, Value>> for Envelope {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Envelope {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(Error::unparsable(format!("expected an object, got {other}"))),
        }
    }
}
