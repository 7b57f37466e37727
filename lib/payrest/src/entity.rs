//! The closed set of records this library can dispatch.

use std::sync::LazyLock;

use payrest_core::{Record, Registry};

use crate::records::{Customer, Invoice, Order, Payment, Refund};

macro_rules! entities {
    ($($variant:ident),+ $(,)?) => {
        /// Any record the payment API can return.
        ///
        /// Untyped dispatch ([`crate::ApiClient::fetch_one`] and friends)
        /// yields this type. Each variant converts back into its record with
        /// `TryFrom`, which hands the value back unchanged on a mismatch.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Entity {
            $(
                #[doc = concat!("A [`", stringify!($variant), "`] record.")]
                $variant($variant),
            )+
        }

        impl Entity {
            /// The type tag this value was resolved from.
            #[must_use]
            pub const fn entity(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $variant::ENTITY,)+
                }
            }
        }

        $(
            impl From<$variant> for Entity {
                fn from(record: $variant) -> Self {
                    Self::$variant(record)
                }
            }

            impl TryFrom<Entity> for $variant {
                type Error = Entity;

                fn try_from(entity: Entity) -> std::result::Result<Self, Self::Error> {
                    match entity {
                        Entity::$variant(record) => Ok(record),
                        other => Err(other),
                    }
                }
            }
        )+

        fn build_registry() -> Registry<Entity> {
            Registry::new()$(.register::<$variant>())+
        }
    };
}

entities!(Customer, Invoice, Order, Payment, Refund);

static REGISTRY: LazyLock<Registry<Entity>> = LazyLock::new(build_registry);

/// The process-wide registry, built on first use and read-only afterwards.
#[must_use]
pub fn registry() -> &'static Registry<Entity> {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use payrest_core::{Envelope, Error};
    use serde_json::json;

    use super::*;

    #[test]
    fn every_record_is_registered() {
        let registry = registry();
        for tag in ["customer", "invoice", "order", "payment", "refund"] {
            check!(registry.contains(tag), "missing {tag}");
        }
        check!(registry.len() == 5);
    }

    #[test]
    fn registry_resolves_by_tag() {
        let envelope =
            Envelope::try_from(json!({"entity": "order", "id": "order_1", "amount": 5000}))
                .expect("object");

        let entity = registry().construct(envelope).expect("order");
        check!(entity.entity() == "order");
        let_assert!(Entity::Order(order) = entity);
        check!(order.amount == Some(5000));
    }

    #[test]
    fn unregistered_tag() {
        let envelope = Envelope::try_from(json!({"entity": "settlement", "id": "setl_1"}))
            .expect("object");
        check!(matches!(
            registry().construct(envelope),
            Err(Error::UnknownEntity(tag)) if tag == "settlement"
        ));
    }

    #[test]
    fn narrowing_returns_mismatches_untouched() {
        let entity = Entity::from(Refund {
            id: "rfnd_1".to_string(),
            payment_id: None,
            amount: Some(100),
            currency: None,
            status: None,
            receipt: None,
            created_at: None,
            extra: serde_json::Map::new(),
        });

        let_assert!(Err(back) = Invoice::try_from(entity.clone()));
        check!(back == entity);
        check!(Refund::try_from(entity).is_ok());
    }
}
