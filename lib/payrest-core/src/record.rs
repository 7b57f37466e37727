//! The record capability.

use crate::{Envelope, Result};

/// A concrete, typed resource built from one record [`Envelope`].
///
/// Each implementor owns a fixed lowercase type tag. Most records are plain
/// serde structs and build themselves with [`Envelope::into_record`]:
///
/// ```
/// use payrest_core::{Envelope, Record, Result};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Item {
///     id: String,
/// }
///
/// impl Record for Item {
///     const ENTITY: &'static str = "item";
///
///     fn from_envelope(envelope: Envelope) -> Result<Self> {
///         envelope.into_record(Self::ENTITY)
///     }
/// }
/// ```
pub trait Record: Sized + Send + 'static {
    /// The type tag found in the `entity` field.
    const ENTITY: &'static str;

    /// Build the record from its envelope.
    fn from_envelope(envelope: Envelope) -> Result<Self>;

    /// The type tag of this value.
    fn entity(&self) -> &'static str {
        Self::ENTITY
    }
}
