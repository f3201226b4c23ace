//! Cortege Core - domain kernel for the cemetery-services backend
//!
//! This crate is the anti-corruption layer between the immutable domain
//! model and the upstream REST service's wire payloads:
//! - Entities (Customer, Cemetery, Schedule, Visit) and their value
//!   objects, with invariants enforced in constructors
//! - The hydration framework: composable, bidirectional, pure
//!   transformations between domain objects and payloads
//! - Runtime payload schemas with per-field constraints
//! - Repository ports implemented by the out-of-process adaptors
//! - Wire boundary helpers and the logging facility
//!
//! No code here performs network I/O, caches, or coordinates concurrency;
//! everything is synchronous and side-effect-free apart from logging at
//! the wire boundary.

pub mod errors;
pub mod fixture;
pub mod hydration;
pub mod logging;
pub mod model;
pub mod repository;
pub mod schema;
pub mod wire;

// Re-export commonly used types
pub use errors::{DomainError, HydrationError, RepositoryError, Result, SchemaError};
pub use hydration::{Hydrator, SchemaHydrator, WirePayload};
pub use model::{
    Address, Cemetery, CemeteryKind, Customer, PhoneNumber, Schedule, ScheduleResult, Visit,
    VisitCriteria,
};
pub use schema::{FieldRule, Schema};
