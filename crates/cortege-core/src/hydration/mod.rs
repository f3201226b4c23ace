//! Hydration framework - bidirectional domain/wire transformation
//!
//! A hydrator is a pure, stateless pair of functions between an in-process
//! domain representation and an external wire payload representation:
//! `hydrate` (wire → domain, fallible) and `dehydrate` (domain → wire,
//! total). Hydrators compose: collection combinators wrap an inner
//! hydrator, the optional combinator makes it null-safe, the combined
//! combinator lifts per-field hydrators over a whole tuple, and per-entity
//! hydrators assemble all of the above around the entity constructor.
//!
//! Nothing here performs I/O, holds state, or depends on call order; every
//! hydrator call is independent and referentially transparent, so
//! concurrent use needs no coordination.

pub mod cemetery;
pub mod combined;
pub mod contact;
pub mod criteria;
pub mod customer;
pub mod enums;
pub mod id;
pub mod list;
pub mod map;
pub mod optional;
pub mod primitive;
pub mod schedule;
pub mod set;
pub mod time;
pub mod visit;

pub use cemetery::{CemeteryHydrator, CemeteryPayload};
pub use combined::CombinedHydrator;
pub use contact::{AddressHydrator, AddressPayload, PhoneHydrator};
pub use criteria::{VisitCriteriaHydrator, VisitCriteriaPayload};
pub use customer::{CustomerHydrator, CustomerPayload};
pub use enums::{EnumHydrator, WireEnum};
pub use id::IdHydrator;
pub use list::ListHydrator;
pub use map::{MapHydrator, MapStore, OrderedMapHydrator, UnorderedMapHydrator, WireKey};
pub use optional::OptionalHydrator;
pub use primitive::PrimitiveHydrator;
pub use schedule::{ScheduleHydrator, SchedulePayload};
pub use set::SetHydrator;
pub use time::{DateHydrator, DateTimeHydrator};
pub use visit::{VisitHydrator, VisitPayload};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{Result, SchemaError};
use crate::schema::Schema;

/// A pure bidirectional transformation between a domain value and its wire
/// payload
pub trait Hydrator {
    /// In-process domain representation
    type Domain;
    /// External wire payload representation
    type Payload;

    /// Transform a wire payload into a domain value
    ///
    /// # Errors
    ///
    /// Returns a schema error when a wire-format value cannot be decoded,
    /// or a domain error when the decoded values violate a constructor
    /// invariant. The first failure aborts; no partial result exists.
    fn hydrate(&self, payload: Self::Payload) -> Result<Self::Domain>;

    /// Transform a domain value back into its wire payload
    ///
    /// Total: every observable domain value has a wire form.
    fn dehydrate(&self, value: &Self::Domain) -> Self::Payload;
}

/// Nominal tag carried by every entity payload type
///
/// The tag brands the payload: two structurally identical payload structs
/// for different entities are distinct Rust types *and* carry distinct
/// tags, so one can never be validated or reported under the other's name.
pub trait WirePayload {
    /// Entity tag, also used by the matching [`Schema`]
    const ENTITY: &'static str;
}

/// A hydrator whose payload has a declared runtime schema
///
/// Adds the untrusted-input path: `as_payload` runs the schema over a raw
/// JSON value before the value is allowed to become a typed payload.
pub trait SchemaHydrator: Hydrator
where
    Self::Payload: DeserializeOwned,
{
    /// The runtime schema describing this hydrator's wire payload
    fn schema(&self) -> Schema;

    /// Validate an untrusted JSON value and admit it as a typed payload
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] naming the first offending field.
    fn as_payload(&self, raw: Value) -> Result<Self::Payload> {
        self.schema().check(&raw)?;
        serde_json::from_value(raw).map_err(|e| {
            SchemaError::MalformedJson {
                detail: e.to_string(),
            }
            .into()
        })
    }
}
