//! Type tag to constructor mapping.

use std::collections::HashMap;
use std::fmt;

use crate::{COLLECTION_TAG, Envelope, Error, Record, Result};

/// Builds one variant of `E` from a record envelope.
pub type Constructor<E> = fn(Envelope) -> Result<E>;

/// Closed table from type tag to record constructor.
///
/// `E` is the sum type of every record the library knows. The table is built
/// once with [`Registry::register`] and only read afterwards, so a shared
/// reference can be used from any number of tasks.
///
/// # Example
///
/// ```
/// use payrest_core::{Envelope, Record, Registry, Result};
///
/// #[derive(Debug, serde::Deserialize)]
/// struct Refund { id: String }
///
/// impl Record for Refund {
///     const ENTITY: &'static str = "refund";
///     fn from_envelope(envelope: Envelope) -> Result<Self> {
///         envelope.into_record(Self::ENTITY)
///     }
/// }
///
/// #[derive(Debug)]
/// enum Entity { Refund(Refund) }
///
/// impl From<Refund> for Entity {
///     fn from(refund: Refund) -> Self { Self::Refund(refund) }
/// }
///
/// let registry = Registry::<Entity>::new().register::<Refund>();
/// assert!(registry.resolve("refund").is_ok());
/// assert!(registry.resolve("dispute").is_err());
/// ```
pub struct Registry<E> {
    constructors: HashMap<&'static str, Constructor<E>>,
}

fn construct<R, E>(envelope: Envelope) -> Result<E>
where
    R: Record,
    E: From<R>,
{
    R::from_envelope(envelope).map(E::from)
}

impl<E> Registry<E> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Adds `R` under its type tag.
    ///
    /// # Panics
    ///
    /// Panics if the tag is the reserved collection tag or is already taken.
    #[must_use]
    pub fn register<R>(mut self) -> Self
    where
        R: Record,
        E: From<R>,
    {
        assert!(
            R::ENTITY != COLLECTION_TAG,
            "`{COLLECTION_TAG}` is reserved for collection envelopes"
        );
        let previous = self.constructors.insert(R::ENTITY, construct::<R, E>);
        assert!(previous.is_none(), "entity `{}` registered twice", R::ENTITY);
        self
    }

    /// Looks up the constructor for a tag.
    pub fn resolve(&self, tag: &str) -> Result<Constructor<E>> {
        self.constructors
            .get(tag)
            .copied()
            .ok_or_else(|| Error::unknown_entity(tag))
    }

    /// Resolves the envelope's tag and builds the record.
    pub fn construct(&self, envelope: Envelope) -> Result<E> {
        let constructor = self.resolve(envelope.tag()?)?;
        constructor(envelope)
    }

    /// Returns `true` if the tag is registered.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Registered tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constructors.keys().copied()
    }

    /// Number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.tags().collect();
        tags.sort_unstable();
        f.debug_struct("Registry").field("tags", &tags).finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use assert2::{check, let_assert};
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub(crate) struct Invoice {
        pub(crate) id: String,
        pub(crate) amount: i64,
    }

    impl Record for Invoice {
        const ENTITY: &'static str = "invoice";

        fn from_envelope(envelope: Envelope) -> Result<Self> {
            envelope.into_record(Self::ENTITY)
        }
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub(crate) struct Refund {
        pub(crate) id: String,
    }

    impl Record for Refund {
        const ENTITY: &'static str = "refund";

        fn from_envelope(envelope: Envelope) -> Result<Self> {
            envelope.into_record(Self::ENTITY)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Sample {
        Invoice(Invoice),
        Refund(Refund),
    }

    impl From<Invoice> for Sample {
        fn from(invoice: Invoice) -> Self {
            Self::Invoice(invoice)
        }
    }

    impl From<Refund> for Sample {
        fn from(refund: Refund) -> Self {
            Self::Refund(refund)
        }
    }

    pub(crate) fn registry() -> Registry<Sample> {
        Registry::new().register::<Invoice>().register::<Refund>()
    }

    fn envelope(value: serde_json::Value) -> Envelope {
        Envelope::try_from(value).expect("object")
    }

    #[test]
    fn construct_picks_variant_from_tag() {
        let registry = registry();

        let invoice = registry
            .construct(envelope(json!({"entity": "invoice", "id": "inv_1", "amount": 500})))
            .expect("invoice");
        check!(
            invoice
                == Sample::Invoice(Invoice {
                    id: "inv_1".to_string(),
                    amount: 500
                })
        );

        let refund = registry
            .construct(envelope(json!({"entity": "refund", "id": "rfnd_1"})))
            .expect("refund");
        check!(matches!(refund, Sample::Refund(Refund { ref id }) if id == "rfnd_1"));
    }

    #[test]
    fn unknown_tag_is_reported() {
        let_assert!(
            Err(Error::UnknownEntity(tag)) =
                registry().construct(envelope(json!({"entity": "dispute", "id": "disp_1"})))
        );
        check!(tag == "dispute");
    }

    #[test]
    fn missing_tag_is_not_an_unknown_entity() {
        let result = registry().construct(envelope(json!({"id": "inv_1", "amount": 1})));
        check!(matches!(result, Err(Error::UnparsableResponse(_))));
    }

    #[test]
    fn tags_and_debug() {
        let registry = registry();
        check!(registry.len() == 2);
        check!(registry.contains("invoice"));
        check!(!registry.contains("collection"));
        check!(format!("{registry:?}") == r#"Registry { tags: ["invoice", "refund"] }"#);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn duplicate_registration_panics() {
        let _ = Registry::<Sample>::new()
            .register::<Invoice>()
            .register::<Invoice>();
    }
}
