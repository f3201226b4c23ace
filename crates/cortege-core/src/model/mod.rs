//! Domain model: entities and value objects
//!
//! Entities have private fields, fallible constructors and getters. A
//! constructor is the only way in, so every observable instance satisfies
//! its invariants; updates reconstruct the entity instead of mutating it.

pub mod address;
pub mod cemetery;
pub mod criteria;
pub mod customer;
pub mod phone;
pub mod schedule;
pub mod visit;

pub use address::Address;
pub use cemetery::{Cemetery, CemeteryKind};
pub use criteria::VisitCriteria;
pub use customer::Customer;
pub use phone::PhoneNumber;
pub use schedule::{Schedule, ScheduleResult};
pub use visit::Visit;
