//! Logging facility
//!
//! Single initialization point plus the canonical operation macros. The
//! hydrators themselves are pure and never log; only the wire boundary
//! helpers are instrumented.

pub mod init;
pub mod macros;

pub use init::{init, Profile};
