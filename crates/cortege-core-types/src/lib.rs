//! Core types shared across Cortege facilities
//!
//! This crate provides the foundational types used by the domain kernel
//! and its boundaries:
//!
//! - **Domain traits**: `ValueObject` and `Entity`
//! - **Identifiers**: the UUID-backed `Identifier` value object and the
//!   typed entity ids (`CustomerId`, `CemeteryId`, `ScheduleId`, `VisitId`)
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction
//! - **Telemetry constants**: canonical field keys and event names

pub mod identifier;
pub mod sensitive;
pub mod telemetry;
pub mod value_object;

pub use identifier::{
    CemeteryId, CustomerId, Identifier, InvalidIdentifier, ScheduleId, TypedId, VisitId,
};
pub use sensitive::Sensitive;
pub use value_object::{Entity, ValueObject};
