//! Identifier value objects for domain entities
//!
//! Every entity id wraps the same `Identifier` value object: a UUID in its
//! canonical string form, validated at construction. Ids stay strings —
//! the upstream sends and expects bare UUID strings, so there is nothing to
//! gain from carrying a binary `Uuid` around the domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::value_object::ValueObject;

/// Construction failed because the input is not a canonical UUID string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a valid UUID identifier: {value}")]
pub struct InvalidIdentifier {
    pub value: String,
}

/// Uniform interface over the typed entity ids
///
/// Lets generic code (the id hydrator, repositories) work with any entity
/// id without giving up the nominal distinction between them — a
/// `CustomerId` still cannot stand in for a `CemeteryId`.
pub trait TypedId: Sized + Clone + Eq + Ord + std::hash::Hash + fmt::Debug {
    /// Validate and wrap a UUID string
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if `value` is not a canonical UUID.
    fn from_string(value: String) -> Result<Self, InvalidIdentifier>;

    /// Get the string representation
    fn as_str(&self) -> &str;
}

/// A durable identifier backed by a UUID string
///
/// The string form is the canonical representation; validation happens once
/// in [`Identifier::parse`] and the value is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Identifier(String);

impl Identifier {
    /// Validate and wrap a UUID string
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if `value` is not a canonical UUID.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let value = value.into();
        if Uuid::parse_str(&value).is_err() {
            return Err(InvalidIdentifier { value });
        }
        Ok(Self(value))
    }

    /// Generate a fresh random identifier (UUIDv4)
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Identifier {}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Deserialization goes through `parse` so a malformed id can never enter
// the domain via serde.
impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Identifier::parse(raw).map_err(serde::de::Error::custom)
    }
}

/// Identifier of a Customer entity
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CustomerId(Identifier);

impl CustomerId {
    /// Validate and wrap a UUID string
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if `value` is not a canonical UUID.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        Identifier::parse(value).map(Self)
    }

    /// Generate a fresh random id
    pub fn random() -> Self {
        Self(Identifier::random())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl ValueObject for CustomerId {}

impl TypedId for CustomerId {
    fn from_string(value: String) -> Result<Self, InvalidIdentifier> {
        Self::parse(value)
    }

    fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a Cemetery entity
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CemeteryId(Identifier);

impl CemeteryId {
    /// Validate and wrap a UUID string
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if `value` is not a canonical UUID.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        Identifier::parse(value).map(Self)
    }

    /// Generate a fresh random id
    pub fn random() -> Self {
        Self(Identifier::random())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl ValueObject for CemeteryId {}

impl TypedId for CemeteryId {
    fn from_string(value: String) -> Result<Self, InvalidIdentifier> {
        Self::parse(value)
    }

    fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CemeteryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a Schedule entity
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ScheduleId(Identifier);

impl ScheduleId {
    /// Validate and wrap a UUID string
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if `value` is not a canonical UUID.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        Identifier::parse(value).map(Self)
    }

    /// Generate a fresh random id
    pub fn random() -> Self {
        Self(Identifier::random())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl ValueObject for ScheduleId {}

impl TypedId for ScheduleId {
    fn from_string(value: String) -> Result<Self, InvalidIdentifier> {
        Self::parse(value)
    }

    fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a Visit entity
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VisitId(Identifier);

impl VisitId {
    /// Validate and wrap a UUID string
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if `value` is not a canonical UUID.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        Identifier::parse(value).map(Self)
    }

    /// Generate a fresh random id
    pub fn random() -> Self {
        Self(Identifier::random())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl ValueObject for VisitId {}

impl TypedId for VisitId {
    fn from_string(value: String) -> Result<Self, InvalidIdentifier> {
        Self::parse(value)
    }

    fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
