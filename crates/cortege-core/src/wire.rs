//! Wire boundary helpers
//!
//! The HTTP adaptor hands raw response text in and takes request body text
//! out. These helpers do the full crossing in one call: parse the text,
//! run the schema over the untrusted value, hydrate into the domain — or,
//! outbound, dehydrate and serialize. They are the one instrumented code
//! path in the crate; the hydrators they drive stay pure and silent.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{HydrationError, Result, SchemaError};
use crate::hydration::SchemaHydrator;
use crate::{log_op_end, log_op_error, log_op_start};

/// Read one entity from raw response text
///
/// # Errors
///
/// Returns `MalformedJson` for unparseable text, a schema error for a
/// shape violation, or a domain error from the entity constructor.
pub fn read_entry<H>(hydrator: &H, text: &str) -> Result<H::Domain>
where
    H: SchemaHydrator,
    H::Payload: DeserializeOwned,
{
    let entity = hydrator.schema().entity();
    log_op_start!("read_entry", entity = entity);

    let result = parse(text)
        .and_then(|raw| hydrator.as_payload(raw))
        .and_then(|payload| hydrator.hydrate(payload));

    match &result {
        Ok(_) => log_op_end!("read_entry", entity = entity),
        Err(err) => log_op_error!("read_entry", err, entity = entity),
    }
    result
}

/// Read a whole listing from raw response text
///
/// The upstream returns listings as a bare JSON array. Every element must
/// hydrate; the first failure aborts the read.
///
/// # Errors
///
/// As [`read_entry`], plus `NotAnArray` when the root is not an array.
pub fn read_entries<H>(hydrator: &H, text: &str) -> Result<Vec<H::Domain>>
where
    H: SchemaHydrator,
    H::Payload: DeserializeOwned,
{
    let entity = hydrator.schema().entity();
    log_op_start!("read_entries", entity = entity);

    let result: Result<Vec<H::Domain>> = parse(text).and_then(|raw| match raw {
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                hydrator
                    .as_payload(item)
                    .and_then(|payload| hydrator.hydrate(payload))
            })
            .collect(),
        _ => Err(SchemaError::NotAnArray { entity }.into()),
    });

    match &result {
        Ok(entries) => log_op_end!("read_entries", entity = entity, count = entries.len()),
        Err(err) => log_op_error!("read_entries", err, entity = entity),
    }
    result
}

/// Write one entity as request body text
///
/// # Errors
///
/// Returns `Serialization` if the dehydrated payload cannot be encoded.
pub fn write_entry<H>(hydrator: &H, value: &H::Domain) -> Result<String>
where
    H: SchemaHydrator,
    H::Payload: DeserializeOwned + Serialize,
{
    let entity = hydrator.schema().entity();
    log_op_start!("write_entry", entity = entity);

    let payload = hydrator.dehydrate(value);
    let result = serde_json::to_string(&payload).map_err(|e| HydrationError::Serialization {
        detail: e.to_string(),
    });

    match &result {
        Ok(_) => log_op_end!("write_entry", entity = entity),
        Err(err) => log_op_error!("write_entry", err, entity = entity),
    }
    result
}

fn parse(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| {
        SchemaError::MalformedJson {
            detail: e.to_string(),
        }
        .into()
    })
}
