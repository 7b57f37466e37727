//! Response dispatch.
//!
//! Turns a completed exchange into typed records or a structured error.
//! Nothing here performs I/O: the caller runs the exchange and hands over
//! the [`Response`].
//!
//! Only status `200` counts as success. Any other status goes through the
//! [`ErrorTranslator`] with the raw body, whether or not it is JSON.

use bytes::Bytes;
use tracing::debug;

use crate::{Envelope, Error, ErrorTranslator, Registry, Response, Result};

/// The only status treated as success.
pub const STATUS_OK: u16 = 200;

/// Builds one record from a record envelope.
pub fn parse_record<E>(registry: &Registry<E>, envelope: Envelope) -> Result<E> {
    if envelope.is_collection() {
        return Err(Error::unparsable("expected a record, got a collection"));
    }
    registry.construct(envelope)
}

/// Builds every member of a collection envelope, in server order.
///
/// The first member that fails aborts the whole collection.
pub fn parse_collection<E>(registry: &Registry<E>, envelope: Envelope) -> Result<Vec<E>> {
    envelope
        .into_items()?
        .into_iter()
        .map(|item| parse_record(registry, item))
        .collect()
}

/// Dispatches a response expected to carry a single record.
pub fn process_record_response<E>(
    response: &Response<Bytes>,
    registry: &Registry<E>,
    translator: &dyn ErrorTranslator,
) -> Result<E> {
    let envelope = success_envelope(response, translator)?;
    debug!(entity = ?envelope.get(crate::ENTITY_KEY), "dispatching record");
    parse_record(registry, envelope)
}

/// Dispatches a response expected to carry a collection of records.
pub fn process_collection_response<E>(
    response: &Response<Bytes>,
    registry: &Registry<E>,
    translator: &dyn ErrorTranslator,
) -> Result<Vec<E>> {
    let envelope = success_envelope(response, translator)?;
    let records = parse_collection(registry, envelope)?;
    debug!(count = records.len(), "dispatched collection");
    Ok(records)
}

fn success_envelope(
    response: &Response<Bytes>,
    translator: &dyn ErrorTranslator,
) -> Result<Envelope> {
    let status = response.status();
    if status != STATUS_OK {
        let error = translator.translate(status, response.body());
        debug!(status, %error, "server rejected request");
        return Err(error);
    }
    Envelope::from_slice(response.body())
}
